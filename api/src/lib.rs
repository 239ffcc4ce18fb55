//! # API crate: REST client for the Finwatch backend
//!
//! Everything the frontend knows about the backend lives here: the typed
//! wire models, the endpoint catalogue, the HTTP client with its
//! cross-cutting bearer-token and error-policy contracts, the session
//! state machine, and thin typed operations per resource.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `ApiClient` over a swappable [`client::Transport`]; token attachment and the global error policy |
//! | [`error`] | `ApiError` taxonomy and the status → error dispatch table |
//! | [`auth`] | `SessionStore`: login/register/logout/check_auth/update_user over a shared `SessionCell` |
//! | [`models`] | serde mirrors of the backend JSON |
//! | [`endpoints`] | the REST path catalogue |
//! | [`incomes`], [`expenses`], [`goals`], [`investments`], [`dashboard`], [`users`] | typed operations per resource |

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

pub mod dashboard;
pub mod expenses;
pub mod goals;
pub mod incomes;
pub mod investments;
pub mod users;

#[cfg(test)]
mod testing;

pub use auth::{SessionState, SessionStore};
pub use client::{ApiClient, Client, ClientHooks, HttpTransport, NoticeLevel, Transport};
pub use error::{ApiError, FieldError};

/// Session store over the production HTTP transport.
pub type Session = SessionStore<HttpTransport>;
