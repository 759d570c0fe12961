//! Single-slot draft persistence
//!
//! At most one pending job draft exists at a time, stored as JSON under a
//! fixed key. The backing key-value store is a trait so the web frontend can
//! plug in browser localStorage while tests (and non-web builds) use an
//! in-memory map.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::types::JobDraft;

/// Storage slot holding the pending draft.
pub const DRAFT_KEY: &str = "jobDraft";

/// Minimal key-value seam over the persistence collaborator.
pub trait StringStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Wraps the draft slot with serialize/deserialize semantics.
pub struct DraftStore<S> {
    store: S,
}

impl<S: StringStore> DraftStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Serialize and write the draft, overwriting any prior one. Idempotent.
    pub fn save(&self, draft: &JobDraft) {
        match serde_json::to_string(draft) {
            Ok(json) => self.store.set(DRAFT_KEY, &json),
            Err(err) => tracing::warn!("failed to serialize draft: {err}"),
        }
    }

    /// Read the slot. Absent or unreadable content both come back as `None`;
    /// a malformed draft is discarded rather than surfaced as an error.
    pub fn load(&self) -> Option<JobDraft> {
        let raw = self.store.get(DRAFT_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(draft) => Some(draft),
            Err(err) => {
                tracing::warn!("discarding unreadable saved draft: {err}");
                None
            }
        }
    }

    /// Remove the slot. Idempotent, no-op when absent.
    pub fn clear(&self) {
        self.store.remove(DRAFT_KEY);
    }
}

/// In-memory backend for tests and non-browser targets.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StringStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
