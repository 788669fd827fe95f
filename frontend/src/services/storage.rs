use gloo::storage::{LocalStorage, Storage};
use shared::error::StorageError;
use shared::identity::ProfileStore;
use shared::User;

use crate::services::logging::Logger;

/// Cached profile in `window.localStorage`
#[derive(Clone, PartialEq)]
pub struct LocalProfileStore {
    key: String,
}

impl LocalProfileStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl ProfileStore for LocalProfileStore {
    fn load(&self) -> Option<User> {
        match LocalStorage::get::<User>(&self.key) {
            Ok(user) => Some(user),
            Err(gloo::storage::errors::StorageError::KeyNotFound(_)) => None,
            Err(e) => {
                Logger::warn_with_component("identity", &format!("Discarding cached profile: {}", e));
                None
            }
        }
    }

    fn save(&self, user: &User) -> Result<(), StorageError> {
        LocalStorage::set(&self.key, user).map_err(|e| StorageError::Unavailable(e.to_string()))
    }

    fn clear(&self) {
        LocalStorage::delete(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_profile_survives_round_trip_through_local_storage() {
        let store = LocalProfileStore::new("courtBookingTestProfile");
        store.clear();
        assert!(store.load().is_none());

        let user = User::guest(777);
        store.save(&user).unwrap();
        assert_eq!(store.load(), Some(user));

        store.clear();
        assert!(store.load().is_none());
    }
}
