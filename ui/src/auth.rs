//! Session context and route guard.
//!
//! [`SessionProvider`] builds the session store (token storage, API
//! client, hooks) once, resolves the boot-time auth state, and exposes
//! both through context. Views interact with the session only through the
//! [`SessionHandle`] action methods.

use std::sync::Arc;

use api::{ApiError, NoticeLevel, SessionState};
use dioxus::prelude::*;
use store::{AppConfig, SessionStorage, TokenCell};

use crate::notifications::{push_toast, ToastLevel};
use crate::Loading;

/// Get the current session handle.
pub fn use_session() -> SessionHandle {
    SessionHandle {
        store: use_context::<api::Session>(),
        state: use_context::<Signal<SessionState>>(),
    }
}

/// The fixed set of session actions available to views, plus read access
/// to the reactive state. Cheap to clone; holds the shared store and the
/// context signal.
#[derive(Clone)]
pub struct SessionHandle {
    store: api::Session,
    state: Signal<SessionState>,
}

impl SessionHandle {
    pub fn state(&self) -> SessionState {
        (self.state)()
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.state(), SessionState::Authenticated(_))
    }

    pub fn user(&self) -> Option<api::models::UserProfile> {
        match self.state() {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// The client views use for their own resource calls.
    pub fn client(&self) -> api::Client {
        self.store.client().clone()
    }

    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<api::models::UserProfile, ApiError> {
        let result = self.store.login(username, password).await;
        self.sync();
        result
    }

    pub async fn register(
        &mut self,
        new_user: &api::models::RegisterRequest,
    ) -> Result<api::models::UserProfile, ApiError> {
        let result = self.store.register(new_user).await;
        self.sync();
        result
    }

    pub fn logout(&mut self) {
        self.store.logout();
        self.sync();
    }

    pub async fn check_auth(&mut self) {
        self.store.check_auth().await;
        self.sync();
    }

    pub fn update_user(&mut self, update: &api::models::UserUpdate) {
        self.store.update_user(update);
        self.sync();
    }

    fn sync(&mut self) {
        self.state.set(self.store.state());
    }
}

/// Client hooks bridging the API error policy into the UI: notifications
/// go to the toast queue, a forced logout resets the session signal and
/// navigates to the login view.
struct WebHooks {
    state: Signal<SessionState>,
}

impl api::ClientHooks for WebHooks {
    fn notify(&self, level: NoticeLevel, message: &str) {
        push_toast(ToastLevel::from(level), message);
    }

    fn session_expired(&self) {
        tracing::info!("session expired, returning to login");
        let mut state = self.state;
        state.set(SessionState::Unauthenticated);
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    }
}

fn storage_backend() -> Arc<dyn SessionStorage> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(store::LocalStorage::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        Arc::new(store::MemoryStorage::new())
    }
}

/// Provider component that owns the session for the whole app.
/// Wrap the router with it.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let state = use_signal(|| SessionState::Unknown);
    use_context_provider(|| state);

    let config = use_context_provider(AppConfig::default);
    let session = use_context_provider(|| {
        let tokens = TokenCell::new(storage_backend());
        let client =
            api::Client::new(&config, tokens).with_hooks(Arc::new(WebHooks { state }));
        api::Session::new(client)
    });

    // Resolve the persisted token (if any) once on mount.
    let mut state = state;
    let _ = use_resource(move || {
        let session = session.clone();
        async move {
            session.check_auth().await;
            state.set(session.state());
        }
    });

    rsx! {
        {children}
    }
}

/// Gates authenticated-only views.
///
/// While the boot-time check is still in flight, renders a loading
/// indicator and nothing else. Unauthenticated sessions are redirected to
/// the login view; the originally requested path is discarded.
#[component]
pub fn RouteGuard(children: Element) -> Element {
    let session = use_session();
    let nav = use_navigator();

    match session.state() {
        SessionState::Unknown => rsx! {
            div {
                class: "guard-loading",
                Loading { label: "Loading..." }
            }
        },
        SessionState::Unauthenticated => {
            nav.replace("/login");
            rsx! {}
        }
        SessionState::Authenticated(_) => rsx! {
            {children}
        },
    }
}
