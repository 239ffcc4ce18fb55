//! Durable session-token storage.
//!
//! One string key survives page reloads: the bearer token. Nothing else is
//! persisted, in particular no `is_authenticated` flag, which could
//! otherwise desync from the token's actual validity.

use std::sync::{Arc, Mutex};

/// Backend for the single persisted session key.
///
/// Implementations: [`crate::MemoryStorage`] for native targets and tests,
/// [`crate::LocalStorage`] (wasm, `web` feature) for the browser.
pub trait SessionStorage {
    /// Read the persisted token, if any.
    fn load(&self) -> Option<String>;
    /// Persist the token, replacing any previous value.
    fn store(&self, token: &str);
    /// Remove the persisted token. Idempotent.
    fn clear(&self);
}

/// The current bearer token: an in-memory value with write-through
/// persistence into a [`SessionStorage`] backend.
///
/// Every outgoing request reads the token through [`TokenCell::get`] so it
/// always observes the latest value rather than a stale capture.
/// [`TokenCell::take`] atomically clears and returns the previous token;
/// of any number of concurrent callers exactly one sees `Some`.
#[derive(Clone)]
pub struct TokenCell {
    current: Arc<Mutex<Option<String>>>,
    backend: Arc<dyn SessionStorage>,
}

impl TokenCell {
    /// Create a cell over the given backend, seeding the in-memory value
    /// from whatever the backend has persisted.
    pub fn new(backend: Arc<dyn SessionStorage>) -> Self {
        let current = backend.load();
        Self {
            current: Arc::new(Mutex::new(current)),
            backend,
        }
    }

    pub fn get(&self) -> Option<String> {
        self.current.lock().unwrap().clone()
    }

    /// Set the token in memory and persist it.
    pub fn set(&self, token: &str) {
        *self.current.lock().unwrap() = Some(token.to_string());
        self.backend.store(token);
    }

    /// Atomically clear the token, returning the previous value.
    pub fn take(&self) -> Option<String> {
        let previous = self.current.lock().unwrap().take();
        if previous.is_some() {
            self.backend.clear();
        }
        previous
    }

    /// Clear the token from memory and durable storage. Idempotent.
    pub fn clear(&self) {
        *self.current.lock().unwrap() = None;
        self.backend.clear();
    }
}

impl std::fmt::Debug for TokenCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the token itself.
        f.debug_struct("TokenCell")
            .field("present", &self.current.lock().unwrap().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;

    #[test]
    fn seeds_from_backend() {
        let backend = MemoryStorage::new();
        backend.store("persisted-token");

        let cell = TokenCell::new(Arc::new(backend));
        assert_eq!(cell.get().as_deref(), Some("persisted-token"));
    }

    #[test]
    fn set_writes_through() {
        let backend = MemoryStorage::new();
        let cell = TokenCell::new(Arc::new(backend.clone()));

        cell.set("abc123");
        assert_eq!(cell.get().as_deref(), Some("abc123"));
        assert_eq!(backend.load().as_deref(), Some("abc123"));
    }

    #[test]
    fn take_clears_exactly_once() {
        let backend = MemoryStorage::new();
        let cell = TokenCell::new(Arc::new(backend.clone()));
        cell.set("abc123");

        assert_eq!(cell.take().as_deref(), Some("abc123"));
        assert_eq!(cell.take(), None);
        assert_eq!(cell.get(), None);
        assert_eq!(backend.load(), None);
    }

    #[test]
    fn clear_is_idempotent() {
        let backend = MemoryStorage::new();
        let cell = TokenCell::new(Arc::new(backend.clone()));
        cell.set("abc123");

        cell.clear();
        cell.clear();
        assert_eq!(cell.get(), None);
        assert_eq!(backend.load(), None);
    }
}
