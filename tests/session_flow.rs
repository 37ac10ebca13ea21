//! End-to-end pass over the session, wishlist, and listing layers using the
//! bundled seed data and an in-memory storage backend.

use std::rc::Rc;

use futures::executor::block_on;

use collegehub_rs::listing::{ListingParams, ListingQuery, SortBy};
use collegehub_rs::notify::{Level, ToastLog};
use collegehub_rs::session::Session;
use collegehub_rs::storage::{MemoryStorage, StorageBackend, USER_STORAGE_KEY};
use collegehub_rs::store::AppStore;

#[test]
fn demo_account_wishlist_journey() {
	let store = Rc::new(AppStore::seeded());
	let storage = Rc::new(MemoryStorage::default());
	let toasts = Rc::new(ToastLog::default());
	let session = Session::new(store.clone(), storage.clone(), toasts.clone());

	// Any password is accepted for a known email.
	let user = block_on(session.login("john@example.com", "hunter2")).unwrap();
	assert_eq!(user.id, "1");
	assert_eq!(user.wishlist, vec!["1".to_owned(), "3".to_owned()]);

	session.remove_from_wishlist("1").unwrap();
	assert_eq!(session.current_user().unwrap().wishlist, vec!["3".to_owned()]);

	session.add_to_wishlist("6").unwrap();
	assert_eq!(
		session.current_user().unwrap().wishlist,
		vec!["3".to_owned(), "6".to_owned()]
	);

	// Every mutation is mirrored to the store and to durable storage.
	assert_eq!(store.user("1").unwrap().wishlist, vec!["3".to_owned(), "6".to_owned()]);
	let stored: collegehub_rs::data::User = storage.read(USER_STORAGE_KEY).unwrap();
	assert_eq!(stored.wishlist, vec!["3".to_owned(), "6".to_owned()]);

	// A fresh session over the same storage restores the mutated record.
	let revived = Session::new(store.clone(), storage.clone(), Rc::new(ToastLog::default()));
	revived.restore();
	assert_eq!(
		revived.current_user().unwrap().wishlist,
		vec!["3".to_owned(), "6".to_owned()]
	);

	session.logout();
	assert!(!storage.contains(USER_STORAGE_KEY));
	assert!(!session.is_in_wishlist("3"));
	assert_eq!(toasts.last().unwrap().level, Level::Success);
}

#[test]
fn signup_then_save_a_search_result() {
	let store = Rc::new(AppStore::seeded());
	let storage = Rc::new(MemoryStorage::default());
	let session = Session::new(store.clone(), storage, Rc::new(ToastLog::default()));

	let user = block_on(session.signup("Asha Rao", "asha@example.com", "pw")).unwrap();
	assert!(user.wishlist.is_empty());

	// Find a Mumbai MBA college and save it.
	let query = ListingQuery {
		params: ListingParams { city: Some("Mumbai".into()), course: Some("MBA".into()) },
		sort: SortBy::Rating,
		..Default::default()
	};
	let results = query.apply(store.colleges());
	assert_eq!(results.len(), 1);

	session.add_to_wishlist(&results[0].id).unwrap();
	assert!(session.is_in_wishlist(&results[0].id));
	assert_eq!(store.user(&user.id).unwrap().wishlist, vec![results[0].id.clone()]);
}
