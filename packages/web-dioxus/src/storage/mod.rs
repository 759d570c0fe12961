//! Browser persistence for the pending draft
//!
//! Thin localStorage backend behind the core `StringStore` seam. On non-web
//! targets (SSR pass, tests) the store is a no-op sink: drafts only ever
//! live in the visitor's browser.

use jobboard_core::{DraftStore, StringStore};

#[cfg(feature = "web")]
pub struct LocalStore;

#[cfg(feature = "web")]
impl LocalStore {
    fn storage(&self) -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(feature = "web")]
impl StringStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = self.storage() {
            if storage.set_item(key, value).is_err() {
                tracing::warn!("localStorage write for {key} failed");
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            storage.remove_item(key).ok();
        }
    }
}

#[cfg(not(feature = "web"))]
pub struct NullStore;

#[cfg(not(feature = "web"))]
impl StringStore for NullStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn remove(&self, _key: &str) {}
}

#[cfg(feature = "web")]
pub fn draft_store() -> DraftStore<LocalStore> {
    DraftStore::new(LocalStore)
}

#[cfg(not(feature = "web"))]
pub fn draft_store() -> DraftStore<NullStore> {
    DraftStore::new(NullStore)
}
