use folio_core::ThemeStore;
use web_sys as web;

/// `window.localStorage`. Unavailable storage reads as empty; failed writes
/// are logged and dropped.
#[derive(Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Option<web::Storage> {
        web::window()?.local_storage().ok().flatten()
    }
}

impl ThemeStore for LocalStorageStore {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("[theme] localStorage unavailable; {key} not saved");
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("[theme] failed to save {key}: {:?}", e);
        }
    }
}
