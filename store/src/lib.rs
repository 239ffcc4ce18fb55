//! Client-side persistence for the Finwatch frontend.
//!
//! This crate owns the two pieces of state that outlive a single render:
//! the application configuration ([`AppConfig`]) and the durable session
//! token ([`TokenCell`] backed by a [`SessionStorage`] implementation).
//! The profile of the signed-in user is deliberately *not* persisted: the
//! token is the single source of truth and the profile is re-fetched from
//! it on every boot.

pub mod config;

mod memory;
pub use memory::MemoryStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorage;

mod session;
pub use session::{SessionStorage, TokenCell};

pub use config::AppConfig;
