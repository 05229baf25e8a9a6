use abzarestan_shared::{EngagementStore, KeyValueStore, StoreError};
use web_sys::{window, Storage};

/// `window.localStorage` as a [`KeyValueStore`]. Every call looks the
/// storage object up again, so a store built while storage was blocked
/// keeps reporting [`StoreError::Unavailable`] instead of panicking.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn local_storage() -> Option<Storage> {
    window().and_then(|win| win.local_storage().ok().flatten())
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = local_storage().ok_or(StoreError::Unavailable)?;
        storage.set_item(key, value).map_err(|err| StoreError::Write {
            key: key.to_string(),
            reason: format!("{:?}", err),
        })
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let storage = local_storage().ok_or(StoreError::Unavailable)?;
        storage.remove_item(key).map_err(|err| StoreError::Write {
            key: key.to_string(),
            reason: format!("{:?}", err),
        })
    }
}

pub fn engagement_store() -> EngagementStore<LocalStorage> {
    EngagementStore::new(LocalStorage)
}
