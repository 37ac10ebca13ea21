use crate::notify::{Notify, Toast};
use crate::session::Session;
use crate::storage::StorageBackend;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WishlistError {
	#[error("Please login to add to wishlist")]
	NotLoggedIn,
	#[error("College already in wishlist")]
	AlreadySaved,
}

impl<S: StorageBackend, N: Notify> Session<S, N> {
	/// Saves a college to the active user's wishlist. Adding an id that is
	/// already present is idempotent and surfaces an informational toast
	/// rather than an error.
	pub fn add_to_wishlist(&self, college_id: &str) -> Result<(), WishlistError> {
		let Some(mut user) = self.current_user() else {
			let err = WishlistError::NotLoggedIn;
			self.notify().push(Toast::error(err.to_string()));
			return Err(err);
		};
		if user.wishlist.iter().any(|id| id == college_id) {
			let err = WishlistError::AlreadySaved;
			self.notify().push(Toast::info(err.to_string()));
			return Err(err);
		}
		user.wishlist.push(college_id.to_owned());
		self.replace_user(user);
		self.notify().push(Toast::success("Added to wishlist"));
		Ok(())
	}

	/// Drops a college from the active user's wishlist. Absent ids fall
	/// through silently; anonymous calls are a silent no-op as well.
	pub fn remove_from_wishlist(&self, college_id: &str) -> Result<(), WishlistError> {
		let Some(mut user) = self.current_user() else {
			return Err(WishlistError::NotLoggedIn);
		};
		let before = user.wishlist.len();
		user.wishlist.retain(|id| id != college_id);
		if user.wishlist.len() == before {
			return Ok(());
		}
		self.replace_user(user);
		self.notify().push(Toast::success("Removed from wishlist"));
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::User;
	use crate::notify::{Level, ToastLog};
	use crate::storage::{MemoryStorage, StorageBackend, USER_STORAGE_KEY};
	use crate::store::AppStore;
	use futures::executor::block_on;
	use std::rc::Rc;

	struct Fixture {
		store: Rc<AppStore>,
		storage: Rc<MemoryStorage>,
		toasts: Rc<ToastLog>,
		session: Session<Rc<MemoryStorage>, Rc<ToastLog>>,
	}

	fn anonymous() -> Fixture {
		let store = Rc::new(AppStore::seeded());
		let storage = Rc::new(MemoryStorage::default());
		let toasts = Rc::new(ToastLog::default());
		let session = Session::new(store.clone(), storage.clone(), toasts.clone());
		Fixture { store, storage, toasts, session }
	}

	fn logged_in() -> Fixture {
		let fixture = anonymous();
		block_on(fixture.session.login("john@example.com", "pw")).unwrap();
		fixture.toasts.clear();
		fixture
	}

	#[test]
	fn add_requires_a_session() {
		let fixture = anonymous();
		let result = fixture.session.add_to_wishlist("1");
		assert_eq!(result, Err(WishlistError::NotLoggedIn));
		assert_eq!(fixture.toasts.last().unwrap().level, Level::Error);
	}

	#[test]
	fn add_twice_keeps_a_single_entry() {
		let fixture = logged_in();
		fixture.session.add_to_wishlist("6").unwrap();
		let second = fixture.session.add_to_wishlist("6");
		assert_eq!(second, Err(WishlistError::AlreadySaved));
		assert_eq!(fixture.toasts.last().unwrap().level, Level::Info);
		let wishlist = fixture.session.current_user().unwrap().wishlist;
		assert_eq!(wishlist.iter().filter(|id| *id == "6").count(), 1);
	}

	#[test]
	fn add_writes_through_store_and_storage() {
		let fixture = logged_in();
		fixture.session.add_to_wishlist("6").unwrap();
		assert!(fixture.store.user("1").unwrap().wishlist.contains(&"6".to_owned()));
		let stored = fixture.storage.read::<User>(USER_STORAGE_KEY).unwrap();
		assert!(stored.wishlist.contains(&"6".to_owned()));
	}

	#[test]
	fn remove_drops_only_the_named_id() {
		let fixture = logged_in();
		fixture.session.remove_from_wishlist("1").unwrap();
		let wishlist = fixture.session.current_user().unwrap().wishlist;
		assert_eq!(wishlist, vec!["3".to_owned()]);
	}

	#[test]
	fn remove_of_absent_id_is_silent() {
		let fixture = logged_in();
		fixture.session.remove_from_wishlist("999").unwrap();
		assert!(fixture.toasts.last().is_none());
		assert_eq!(
			fixture.session.current_user().unwrap().wishlist,
			vec!["1".to_owned(), "3".to_owned()]
		);
	}

	#[test]
	fn remove_while_anonymous_is_silent() {
		let fixture = anonymous();
		let result = fixture.session.remove_from_wishlist("1");
		assert_eq!(result, Err(WishlistError::NotLoggedIn));
		assert!(fixture.toasts.last().is_none());
	}

	#[test]
	fn membership_follows_mutations() {
		let fixture = logged_in();
		assert!(fixture.session.is_in_wishlist("1"));
		fixture.session.remove_from_wishlist("1").unwrap();
		assert!(!fixture.session.is_in_wishlist("1"));
		fixture.session.add_to_wishlist("1").unwrap();
		assert!(fixture.session.is_in_wishlist("1"));
	}
}
