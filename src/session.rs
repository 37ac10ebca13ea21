use std::cell::RefCell;
use std::rc::Rc;

use crate::data::User;
use crate::notify::{Notify, Toast};
use crate::storage::{StorageBackend, USER_STORAGE_KEY};
use crate::store::AppStore;
use crate::util;

/// Simulated round-trip for login and signup, matching the prototype backend.
const AUTH_DELAY_MS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
	#[default]
	Anonymous,
	/// An identity check is in flight.
	Authenticating,
	Authenticated(User),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
	#[error("Invalid email or password")]
	InvalidCredentials,
	#[error("Email already in use")]
	EmailTaken,
}

/// The identity stub. Owns the notion of "current user": login resolves an
/// account from the store's seed users, signup appends a new account, and the
/// active record is mirrored to durable storage under a fixed key.
///
/// Demo semantics, kept deliberately: the password is accepted but never
/// checked, and a record restored from storage is trusted without
/// re-validation. Real credential verification belongs to an auth service
/// this app does not have.
pub struct Session<S, N> {
	store: Rc<AppStore>,
	storage: S,
	notify: N,
	state: RefCell<AuthState>,
}

impl<S: StorageBackend, N: Notify> Session<S, N> {
	pub fn new(store: Rc<AppStore>, storage: S, notify: N) -> Self {
		Self {
			store,
			storage,
			notify,
			state: RefCell::new(AuthState::Anonymous),
		}
	}

	/// Adopts a previously persisted user record, if any. Called once at
	/// startup.
	pub fn restore(&self) {
		if let Some(user) = self.storage.read::<User>(USER_STORAGE_KEY) {
			log::debug!(target: env!("CARGO_PKG_NAME"), "restored session for {}", user.email);
			*self.state.borrow_mut() = AuthState::Authenticated(user);
		}
	}

	pub fn state(&self) -> AuthState {
		self.state.borrow().clone()
	}

	pub fn current_user(&self) -> Option<User> {
		match &*self.state.borrow() {
			AuthState::Authenticated(user) => Some(user.clone()),
			_ => None,
		}
	}

	pub fn is_authenticating(&self) -> bool {
		matches!(*self.state.borrow(), AuthState::Authenticating)
	}

	pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
		// Accepted but never checked (stub semantics).
		let _ = password;
		*self.state.borrow_mut() = AuthState::Authenticating;
		util::latency(AUTH_DELAY_MS).await;
		match self.store.find_user_by_email(email) {
			Some(user) => {
				self.storage.write(USER_STORAGE_KEY, &user);
				*self.state.borrow_mut() = AuthState::Authenticated(user.clone());
				self.notify.push(Toast::success("Login successful"));
				Ok(user)
			}
			None => {
				*self.state.borrow_mut() = AuthState::Anonymous;
				let err = AuthError::InvalidCredentials;
				self.notify.push(Toast::error(err.to_string()));
				Err(err)
			}
		}
	}

	pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
		let _ = password;
		*self.state.borrow_mut() = AuthState::Authenticating;
		util::latency(AUTH_DELAY_MS).await;
		if self.store.email_taken(email) {
			*self.state.borrow_mut() = AuthState::Anonymous;
			let err = AuthError::EmailTaken;
			self.notify.push(Toast::error(err.to_string()));
			return Err(err);
		}
		let user = User::registered(name, email);
		self.store.insert_user(user.clone());
		self.storage.write(USER_STORAGE_KEY, &user);
		*self.state.borrow_mut() = AuthState::Authenticated(user.clone());
		self.notify.push(Toast::success("Account created successfully"));
		Ok(user)
	}

	/// Always succeeds, whatever the prior state.
	pub fn logout(&self) {
		*self.state.borrow_mut() = AuthState::Anonymous;
		self.storage.delete(USER_STORAGE_KEY);
		self.notify.push(Toast::success("Logged out successfully"));
	}

	/// `false` whenever no user is authenticated.
	pub fn is_in_wishlist(&self, college_id: &str) -> bool {
		match self.current_user() {
			Some(user) => user.wishlist.iter().any(|id| id == college_id),
			None => false,
		}
	}

	pub(crate) fn notify(&self) -> &N {
		&self.notify
	}

	/// Writes a mutated active-user record everywhere it lives: session state,
	/// the user collection, and durable storage.
	pub(crate) fn replace_user(&self, user: User) {
		self.store.update_user(&user);
		self.storage.write(USER_STORAGE_KEY, &user);
		*self.state.borrow_mut() = AuthState::Authenticated(user);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::notify::{Level, ToastLog};
	use crate::storage::MemoryStorage;
	use futures::executor::block_on;
	use rstest::rstest;

	fn session() -> Session<Rc<MemoryStorage>, Rc<ToastLog>> {
		Session::new(
			Rc::new(AppStore::seeded()),
			Rc::new(MemoryStorage::default()),
			Rc::new(ToastLog::default()),
		)
	}

	#[rstest]
	#[case("john@example.com")]
	#[case("JOHN@EXAMPLE.COM")]
	#[case("John@Example.Com")]
	fn login_matches_email_case_insensitively(#[case] email: &str) {
		let session = session();
		let user = block_on(session.login(email, "whatever")).unwrap();
		assert_eq!(user.id, "1");
		assert_eq!(session.current_user().unwrap().id, "1");
	}

	#[test]
	fn login_with_unknown_email_stays_anonymous() {
		let session = session();
		let result = block_on(session.login("nobody@example.com", "pw"));
		assert_eq!(result, Err(AuthError::InvalidCredentials));
		assert_eq!(session.state(), AuthState::Anonymous);
		assert_eq!(session.notify().last().unwrap().level, Level::Error);
	}

	#[test]
	fn login_persists_the_user_record() {
		let storage = Rc::new(MemoryStorage::default());
		let session = Session::new(
			Rc::new(AppStore::seeded()),
			storage.clone(),
			Rc::new(ToastLog::default()),
		);
		block_on(session.login("john@example.com", "pw")).unwrap();
		let stored = storage.read::<User>(USER_STORAGE_KEY).unwrap();
		assert_eq!(stored.id, "1");
	}

	#[test]
	fn signup_with_taken_email_fails_without_mutating_users() {
		let store = Rc::new(AppStore::seeded());
		let session = Session::new(
			store.clone(),
			Rc::new(MemoryStorage::default()),
			Rc::new(ToastLog::default()),
		);
		let before = store.user_count();
		let result = block_on(session.signup("Someone", "JOHN@example.com", "pw"));
		assert_eq!(result, Err(AuthError::EmailTaken));
		assert_eq!(store.user_count(), before);
		assert_eq!(session.state(), AuthState::Anonymous);
	}

	#[test]
	fn signup_with_novel_email_appends_one_user_with_empty_wishlist() {
		let store = Rc::new(AppStore::seeded());
		let session = Session::new(
			store.clone(),
			Rc::new(MemoryStorage::default()),
			Rc::new(ToastLog::default()),
		);
		let before = store.user_count();
		let user = block_on(session.signup("New Person", "new@example.com", "pw")).unwrap();
		assert_eq!(store.user_count(), before + 1);
		assert!(user.wishlist.is_empty());
		assert!(user.image.is_some());
		assert_eq!(session.current_user().unwrap().id, user.id);
	}

	#[test]
	fn signup_ids_are_unique() {
		let session = session();
		let a = block_on(session.signup("A", "a@example.com", "pw")).unwrap();
		session.logout();
		let b = block_on(session.signup("B", "b@example.com", "pw")).unwrap();
		assert_ne!(a.id, b.id);
	}

	#[test]
	fn logout_clears_state_and_storage() {
		let storage = Rc::new(MemoryStorage::default());
		let session = Session::new(
			Rc::new(AppStore::seeded()),
			storage.clone(),
			Rc::new(ToastLog::default()),
		);
		block_on(session.login("john@example.com", "pw")).unwrap();
		session.logout();
		assert_eq!(session.state(), AuthState::Anonymous);
		assert!(!storage.contains(USER_STORAGE_KEY));
	}

	#[test]
	fn logout_succeeds_while_anonymous() {
		let session = session();
		session.logout();
		assert_eq!(session.state(), AuthState::Anonymous);
		assert_eq!(session.notify().last().unwrap().level, Level::Success);
	}

	#[test]
	fn restore_trusts_the_persisted_record() {
		let storage = Rc::new(MemoryStorage::default());
		let stranger = User {
			id: "42".into(),
			name: "Stranger".into(),
			email: "stranger@example.com".into(),
			image: None,
			wishlist: vec!["2".into()],
		};
		storage.write(USER_STORAGE_KEY, &stranger);
		let session = Session::new(
			Rc::new(AppStore::seeded()),
			storage,
			Rc::new(ToastLog::default()),
		);
		session.restore();
		// Not in the seed users, adopted anyway.
		assert_eq!(session.current_user().unwrap().id, "42");
	}

	#[test]
	fn wishlist_queries_are_false_while_anonymous() {
		let session = session();
		for id in ["1", "2", "3", "999"] {
			assert!(!session.is_in_wishlist(id));
		}
	}
}
