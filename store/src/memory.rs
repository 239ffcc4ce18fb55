use std::sync::{Arc, Mutex};

use crate::session::SessionStorage;

/// In-memory SessionStorage for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn store(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
    }
}
