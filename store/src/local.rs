//! Browser localStorage backend for the session token.

use crate::session::SessionStorage;

/// The single localStorage key the application writes.
const TOKEN_KEY: &str = "finwatch.token";

/// SessionStorage over `window.localStorage`.
///
/// Storage failures (private browsing, quota) degrade to an absent token;
/// the session then simply resolves unauthenticated.
#[derive(Clone, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStorage for LocalStorage {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_KEY).ok()?
    }

    fn store(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
