//! # Session store
//!
//! Single source of truth for "is this client authenticated" and custodian
//! of the bearer token. State machine:
//!
//! ```text
//! Unknown ──check_auth ok / login / register──▶ Authenticated
//! Unknown ──no token / check_auth failed─────▶ Unauthenticated
//! Authenticated ──logout / any 401───────────▶ Unauthenticated
//! ```
//!
//! There is no Authenticated → Authenticated transition to a different
//! user: `login` on an authenticated store passes through `logout` first.
//!
//! The state itself lives in a [`SessionCell`] shared with the API client,
//! which lets the client's 401 policy transition the session exactly once
//! per expiry no matter how many concurrent requests fail (the first
//! transition to `Unauthenticated` wins; the rest observe it and stay
//! silent). It also means a rejected *login* attempt, which runs while
//! the session is already `Unauthenticated`, produces no spurious
//! "session expired" toast; the backend's message goes to the form alone.

use std::sync::{Arc, Mutex};

use crate::client::{ApiClient, Transport};
use crate::endpoints;
use crate::error::ApiError;
use crate::models::{RegisterRequest, Token, UserProfile, UserUpdate};

#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    /// Boot: a persisted token may exist but has not been verified yet.
    Unknown,
    Unauthenticated,
    Authenticated(UserProfile),
}

/// Shared, single-writer session register. Locks are never held across an
/// await point.
#[derive(Clone, Debug)]
pub struct SessionCell {
    state: Arc<Mutex<SessionState>>,
}

impl Default for SessionCell {
    fn default() -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState::Unknown)),
        }
    }
}

impl SessionCell {
    pub fn get(&self) -> SessionState {
        self.state.lock().unwrap().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(*self.state.lock().unwrap(), SessionState::Authenticated(_))
    }

    pub(crate) fn set(&self, state: SessionState) {
        *self.state.lock().unwrap() = state;
    }

    /// Transition to `Unauthenticated`; returns whether this call performed
    /// the transition. Used by the 401 policy so its side effects fire at
    /// most once per expiry.
    pub(crate) fn expire(&self) -> bool {
        let mut state = self.state.lock().unwrap();
        if *state == SessionState::Unauthenticated {
            false
        } else {
            *state = SessionState::Unauthenticated;
            true
        }
    }
}

/// The session store: the fixed set of actions through which the session
/// may change. Views read state and call these; they never write fields.
pub struct SessionStore<T> {
    client: ApiClient<T>,
    session: SessionCell,
}

impl<T: Clone> Clone for SessionStore<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            session: self.session.clone(),
        }
    }
}

impl<T: Transport> SessionStore<T> {
    /// Wrap a client. The store and the client share one [`SessionCell`].
    pub fn new(client: ApiClient<T>) -> Self {
        let session = client.session().clone();
        Self { client, session }
    }

    /// The client views should use for all their own calls.
    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    pub fn state(&self) -> SessionState {
        self.session.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Submit credentials (form-encoded, OAuth2 password-grant style),
    /// persist the token, then fetch the profile. On any failure the token
    /// and profile are cleared together, never leaving a partial
    /// authenticated state.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserProfile, ApiError> {
        if self.is_authenticated() {
            self.logout();
        }

        let token: Token = self
            .client
            .post_form(endpoints::LOGIN, &[("username", username), ("password", password)])
            .await?;
        self.client.tokens().set(&token.access_token);

        match self.client.get::<UserProfile>(endpoints::ME).await {
            Ok(user) => {
                self.session.set(SessionState::Authenticated(user.clone()));
                Ok(user)
            }
            Err(error) => {
                self.client.tokens().clear();
                self.session.set(SessionState::Unauthenticated);
                Err(error)
            }
        }
    }

    /// Create the account, then log in with the just-submitted
    /// credentials.
    pub async fn register(&self, new_user: &RegisterRequest) -> Result<UserProfile, ApiError> {
        self.client
            .post::<_, UserProfile>(endpoints::REGISTER, new_user)
            .await?;
        self.login(&new_user.username, &new_user.password).await
    }

    /// Clear token and profile from memory and durable storage. Idempotent,
    /// no server round trip.
    pub fn logout(&self) {
        self.client.tokens().clear();
        self.session.set(SessionState::Unauthenticated);
    }

    /// Boot-time resolution. Absent token resolves `Unauthenticated`
    /// without a network call; a present token is verified by fetching the
    /// profile, and any failure clears the session. Never returns an
    /// error, since this runs unattended at startup.
    pub async fn check_auth(&self) {
        if self.client.tokens().get().is_none() {
            self.session.set(SessionState::Unauthenticated);
            return;
        }

        match self.client.get::<UserProfile>(endpoints::ME).await {
            Ok(user) => self.session.set(SessionState::Authenticated(user)),
            Err(error) => {
                tracing::debug!(%error, "stored token rejected, clearing session");
                self.client.tokens().clear();
                self.session.set(SessionState::Unauthenticated);
            }
        }
    }

    /// Merge confirmed profile edits into the cached copy, no round trip.
    pub fn update_user(&self, update: &UserUpdate) {
        let mut state = self.session.get();
        if let SessionState::Authenticated(user) = &mut state {
            user.merge(update);
            self.session.set(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use store::{AppConfig, MemoryStorage, SessionStorage, TokenCell};

    use super::*;
    use crate::client::NoticeLevel;
    use crate::testing::{RecordingHooks, StubTransport};

    fn profile_json(username: &str) -> String {
        serde_json::json!({
            "id": 1,
            "email": format!("{username}@example.com"),
            "username": username,
            "full_name": null,
            "is_active": true,
            "is_superuser": false,
            "created_at": "2024-01-01T00:00:00",
            "updated_at": null,
        })
        .to_string()
    }

    fn fixture() -> (
        SessionStore<StubTransport>,
        StubTransport,
        RecordingHooks,
        MemoryStorage,
    ) {
        let backend = MemoryStorage::new();
        let tokens = TokenCell::new(Arc::new(backend.clone()));
        let transport = StubTransport::new();
        let hooks = RecordingHooks::default();
        let config = AppConfig::default().with_api_base_url("/api/v1");
        let client = ApiClient::with_transport(transport.clone(), &config, tokens)
            .with_hooks(Arc::new(hooks.clone()));
        (SessionStore::new(client), transport, hooks, backend)
    }

    #[tokio::test]
    async fn login_issues_token_and_fetches_profile() {
        let (session, transport, _, backend) = fixture();
        transport.push_json(200, r#"{"access_token": "tok-1", "token_type": "bearer"}"#);
        transport.push_json(200, &profile_json("juan"));

        let user = session.login("juan", "juan123").await.unwrap();
        assert_eq!(user.username, "juan");
        assert!(session.is_authenticated());
        assert_eq!(backend.load().as_deref(), Some("tok-1"));

        let sent = transport.sent();
        assert_eq!(sent.len(), 2);
        // Credentials go out form-encoded and without a bearer header.
        assert!(matches!(sent[0].body, crate::client::Body::Form(_)));
        assert!(sent[0].bearer.is_none());
        // The profile fetch uses the freshly issued token.
        assert_eq!(sent[1].bearer.as_deref(), Some("tok-1"));
    }

    #[tokio::test]
    async fn rejected_credentials_propagate_without_expiry_toast() {
        let (session, transport, hooks, _) = fixture();
        session.check_auth().await; // resolves Unauthenticated, no token
        transport.push_json(401, r#"{"detail": "Incorrect username or password"}"#);

        let error = session.login("juan", "wrong").await.unwrap_err();
        assert_eq!(
            error,
            ApiError::Authentication("Incorrect username or password".to_string())
        );
        assert_eq!(session.state(), SessionState::Unauthenticated);
        // The message reaches the form; no session-expired side effects.
        assert!(hooks.notices().is_empty());
        assert_eq!(hooks.expirations(), 0);
    }

    #[tokio::test]
    async fn failed_profile_fetch_leaves_no_partial_state() {
        let (session, transport, _, backend) = fixture();
        transport.push_json(200, r#"{"access_token": "tok-1", "token_type": "bearer"}"#);
        transport.push_json(500, r#"{"detail": "boom"}"#);

        assert!(session.login("juan", "juan123").await.is_err());
        assert_eq!(session.state(), SessionState::Unauthenticated);
        assert_eq!(session.client().tokens().get(), None);
        assert_eq!(backend.load(), None);
    }

    #[tokio::test]
    async fn login_then_logout_ends_unauthenticated_and_empty() {
        let (session, transport, _, backend) = fixture();
        transport.push_json(200, r#"{"access_token": "tok-1", "token_type": "bearer"}"#);
        transport.push_json(200, &profile_json("juan"));
        session.login("juan", "juan123").await.unwrap();

        session.logout();
        assert_eq!(session.state(), SessionState::Unauthenticated);
        assert_eq!(session.client().tokens().get(), None);
        assert_eq!(backend.load(), None);

        // Idempotent.
        session.logout();
        assert_eq!(session.state(), SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn check_auth_without_token_makes_no_network_call() {
        let (session, transport, _, _) = fixture();
        session.check_auth().await;
        assert_eq!(session.state(), SessionState::Unauthenticated);
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn check_auth_with_rejected_token_clears_storage_idempotently() {
        let (session, transport, _, backend) = fixture();
        // Simulate a persisted session from a previous visit.
        session.client().tokens().set("stale-token");
        transport.push_json(401, r#"{"detail": "Could not validate credentials"}"#);

        session.check_auth().await;
        assert_eq!(session.state(), SessionState::Unauthenticated);
        assert_eq!(backend.load(), None);
        let calls_after_first = transport.sent().len();
        assert_eq!(calls_after_first, 1);

        // Second run: token is gone, same end state, no further network.
        session.check_auth().await;
        assert_eq!(session.state(), SessionState::Unauthenticated);
        assert_eq!(transport.sent().len(), calls_after_first);
    }

    #[tokio::test]
    async fn concurrent_401s_force_logout_once() {
        let (session, transport, hooks, _) = fixture();
        transport.push_json(200, r#"{"access_token": "tok-1", "token_type": "bearer"}"#);
        transport.push_json(200, &profile_json("juan"));
        session.login("juan", "juan123").await.unwrap();
        hooks.reset();

        transport.push_json(401, r#"{"detail": "Token expired"}"#);
        transport.push_json(401, r#"{"detail": "Token expired"}"#);

        let client = session.client();
        let (a, b) = tokio::join!(
            client.get::<serde_json::Value>("/incomes"),
            client.get::<serde_json::Value>("/expenses"),
        );
        assert!(a.is_err());
        assert!(b.is_err());

        assert_eq!(session.state(), SessionState::Unauthenticated);
        assert_eq!(session.client().tokens().get(), None);
        // Exactly one forced logout and one session-expired notification.
        assert_eq!(hooks.expirations(), 1);
        let notices = hooks.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].0, NoticeLevel::Error);
        assert!(notices[0].1.contains("session has expired"));
    }

    #[tokio::test]
    async fn tokenless_request_carries_no_auth_header_and_expires_once() {
        let (session, transport, hooks, _) = fixture();
        transport.push_json(200, r#"{"access_token": "tok-1", "token_type": "bearer"}"#);
        transport.push_json(200, &profile_json("juan"));
        session.login("juan", "juan123").await.unwrap();
        hooks.reset();

        // Token vanished out from under an authenticated session.
        session.client().tokens().clear();

        transport.push_json(401, r#"{"detail": "Not authenticated"}"#);
        let result = session.client().get::<serde_json::Value>("/incomes").await;
        assert!(result.is_err());

        let sent = transport.sent();
        assert!(sent.last().unwrap().bearer.is_none());
        assert_eq!(hooks.expirations(), 1);
        assert_eq!(hooks.notices().len(), 1);
        assert_eq!(session.state(), SessionState::Unauthenticated);
    }

    #[tokio::test]
    async fn update_user_merges_and_preserves_other_fields() {
        let (session, transport, _, _) = fixture();
        transport.push_json(200, r#"{"access_token": "tok-1", "token_type": "bearer"}"#);
        transport.push_json(200, &profile_json("juan"));
        session.login("juan", "juan123").await.unwrap();

        session.update_user(&UserUpdate {
            full_name: Some("X".to_string()),
            ..Default::default()
        });

        match session.state() {
            SessionState::Authenticated(user) => {
                assert_eq!(user.full_name.as_deref(), Some("X"));
                assert_eq!(user.username, "juan");
                assert_eq!(user.email, "juan@example.com");
            }
            other => panic!("expected authenticated state, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn register_auto_logs_in() {
        let (session, transport, _, _) = fixture();
        transport.push_json(200, &profile_json("ana"));
        transport.push_json(200, r#"{"access_token": "tok-2", "token_type": "bearer"}"#);
        transport.push_json(200, &profile_json("ana"));

        let new_user = RegisterRequest {
            email: "ana@example.com".to_string(),
            username: "ana".to_string(),
            full_name: Some("Ana".to_string()),
            password: "ana123".to_string(),
        };
        let user = session.register(&new_user).await.unwrap();
        assert_eq!(user.username, "ana");
        assert!(session.is_authenticated());

        let sent = transport.sent();
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[0].url, "/api/v1/auth/register");
        assert!(matches!(sent[1].body, crate::client::Body::Form(_)));
    }
}
