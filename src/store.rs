use std::cell::RefCell;

use crate::data::{fixtures, City, College, Testimonial, User};

/// Handle over the fixture collections. Colleges, cities, and testimonials are
/// read-only; the user list accepts signup appends and wishlist write-backs.
///
/// Lookups that miss return `None` rather than failing. Interior mutability is
/// a plain `RefCell` since the app runs on a single logical thread; a
/// multi-threaded port would need to serialize user-record access instead.
pub struct AppStore {
	colleges: Vec<College>,
	cities: Vec<City>,
	testimonials: Vec<Testimonial>,
	users: RefCell<Vec<User>>,
}

impl AppStore {
	pub fn new(fixtures: fixtures::Fixtures) -> Self {
		Self {
			colleges: fixtures.colleges,
			cities: fixtures.cities,
			testimonials: fixtures.testimonials,
			users: RefCell::new(fixtures.users),
		}
	}

	/// Store loaded with the bundled seed data.
	pub fn seeded() -> Self {
		Self::new(fixtures::seed())
	}

	pub fn colleges(&self) -> &[College] {
		&self.colleges
	}

	pub fn college(&self, id: &str) -> Option<&College> {
		self.colleges.iter().find(|college| college.id == id)
	}

	pub fn featured_colleges(&self) -> Vec<&College> {
		self.colleges.iter().filter(|college| college.featured).collect()
	}

	pub fn cities(&self) -> &[City] {
		&self.cities
	}

	pub fn testimonials(&self) -> &[Testimonial] {
		&self.testimonials
	}

	pub fn user_count(&self) -> usize {
		self.users.borrow().len()
	}

	pub fn user(&self, id: &str) -> Option<User> {
		self.users.borrow().iter().find(|user| user.id == id).cloned()
	}

	pub fn find_user_by_email(&self, email: &str) -> Option<User> {
		self.users
			.borrow()
			.iter()
			.find(|user| user.email.eq_ignore_ascii_case(email))
			.cloned()
	}

	pub fn email_taken(&self, email: &str) -> bool {
		self.find_user_by_email(email).is_some()
	}

	pub fn insert_user(&self, user: User) {
		self.users.borrow_mut().push(user);
	}

	/// Replaces the stored record matching `user.id`. Unknown ids are ignored.
	pub fn update_user(&self, user: &User) {
		let mut users = self.users.borrow_mut();
		if let Some(existing) = users.iter_mut().find(|existing| existing.id == user.id) {
			*existing = user.clone();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::User;

	#[test]
	fn lookups_that_miss_return_none() {
		let store = AppStore::seeded();
		assert!(store.college("999").is_none());
		assert!(store.user("999").is_none());
		assert!(store.find_user_by_email("nobody@example.com").is_none());
	}

	#[test]
	fn email_lookup_ignores_case() {
		let store = AppStore::seeded();
		let user = store.find_user_by_email("JOHN@Example.COM").unwrap();
		assert_eq!(user.id, "1");
	}

	#[test]
	fn update_user_replaces_the_matching_record() {
		let store = AppStore::seeded();
		let mut user = store.user("1").unwrap();
		user.wishlist.push("6".into());
		store.update_user(&user);
		assert_eq!(store.user("1").unwrap().wishlist, user.wishlist);
	}

	#[test]
	fn update_user_ignores_unknown_ids() {
		let store = AppStore::seeded();
		let count = store.user_count();
		store.update_user(&User {
			id: "999".into(),
			name: "Ghost".into(),
			email: "ghost@example.com".into(),
			image: None,
			wishlist: Vec::new(),
		});
		assert_eq!(store.user_count(), count);
		assert!(store.user("999").is_none());
	}
}
