use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};

/// The single key holding the serialized active-user record.
pub static USER_STORAGE_KEY: &str = "currentUser";

/// Durable key-value storage for session state. The session writes through
/// this seam so tests can swap the browser's local storage for an in-memory
/// map.
pub trait StorageBackend {
	fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T>;
	fn write<T: Serialize>(&self, key: &str, value: &T);
	fn delete(&self, key: &str);
}

impl<S: StorageBackend> StorageBackend for Rc<S> {
	fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
		(**self).read(key)
	}

	fn write<T: Serialize>(&self, key: &str, value: &T) {
		(**self).write(key, value)
	}

	fn delete(&self, key: &str) {
		(**self).delete(key)
	}
}

/// Browser local storage; survives reloads.
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

impl StorageBackend for BrowserStorage {
	fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
		LocalStorage::get::<T>(key).ok()
	}

	fn write<T: Serialize>(&self, key: &str, value: &T) {
		if let Err(err) = LocalStorage::set(key, value) {
			log::error!(target: env!("CARGO_PKG_NAME"), "failed to persist {key}: {err:?}");
		}
	}

	fn delete(&self, key: &str) {
		LocalStorage::delete(key);
	}
}

/// In-memory backend with the same contract, for tests and native builds.
#[derive(Default)]
pub struct MemoryStorage(RefCell<HashMap<String, String>>);

impl MemoryStorage {
	pub fn contains(&self, key: &str) -> bool {
		self.0.borrow().contains_key(key)
	}
}

impl StorageBackend for MemoryStorage {
	fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
		let map = self.0.borrow();
		let raw = map.get(key)?;
		serde_json::from_str(raw).ok()
	}

	fn write<T: Serialize>(&self, key: &str, value: &T) {
		match serde_json::to_string(value) {
			Ok(raw) => {
				self.0.borrow_mut().insert(key.to_owned(), raw);
			}
			Err(err) => {
				log::error!(target: env!("CARGO_PKG_NAME"), "failed to serialize {key}: {err:?}");
			}
		}
	}

	fn delete(&self, key: &str) {
		self.0.borrow_mut().remove(key);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn memory_storage_round_trips_and_deletes() {
		let storage = MemoryStorage::default();
		storage.write("k", &vec!["a".to_owned(), "b".to_owned()]);
		assert!(storage.contains("k"));
		assert_eq!(storage.read::<Vec<String>>("k").unwrap(), vec!["a", "b"]);
		storage.delete("k");
		assert!(!storage.contains("k"));
		assert!(storage.read::<Vec<String>>("k").is_none());
	}
}
