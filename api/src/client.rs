//! # The API client
//!
//! Single egress point for every backend call. Two cross-cutting contracts
//! live here and nowhere else:
//!
//! 1. **Request contract**: before each send the current bearer token is
//!    read from the shared [`TokenCell`] (never from a stale capture) and
//!    attached as an `Authorization` header when present. Requests without
//!    a token (login, register) go out bare.
//! 2. **Response contract**: a non-2xx outcome is classified by the
//!    dispatch table in [`crate::error`], the corresponding user-visible
//!    side effect fires exactly once (a notification, plus forced logout
//!    and redirect on 401), and the error is then returned to the caller
//!    so views can still disable buttons or keep forms open.
//!
//! The 401 side effects are keyed on the session transition: of any number
//! of concurrent requests that observe a 401, only the one that moves the
//! shared [`SessionCell`] to `Unauthenticated` performs the forced logout,
//! the session-expired notification and the redirect. A 401 on the login
//! call itself runs while the session is already `Unauthenticated`, so
//! the backend's message reaches the login form without a spurious
//! "session expired" toast.
//!
//! Actual I/O sits behind the [`Transport`] trait; production uses
//! [`HttpTransport`] over `reqwest`, tests substitute a stub and run
//! without a network.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use store::{AppConfig, TokenCell};

use crate::auth::SessionCell;
use crate::error::{classify, ApiError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Clone, Debug)]
pub enum Body {
    Empty,
    Json(serde_json::Value),
    /// `application/x-www-form-urlencoded`, used by the OAuth2
    /// password-grant login endpoint.
    Form(Vec<(String, String)>),
}

#[derive(Clone, Debug)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: Body,
    pub bearer: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

/// A network-level failure: no HTTP response was received.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Executes one HTTP exchange. The seam that lets tests replace the
/// network with canned responses.
pub trait Transport {
    async fn send(&self, request: Request) -> Result<Response, TransportError>;
}

/// Production transport over `reqwest` (fetch-backed on wasm).
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl Transport for HttpTransport {
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.http.request(method, &request.url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        builder = match request.body {
            Body::Empty => builder,
            Body::Json(value) => builder.json(&value),
            Body::Form(fields) => {
                let encoded = serde_urlencoded::to_string(&fields)
                    .map_err(|e| TransportError(e.to_string()))?;
                builder
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body(encoded)
            }
        };

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError(e.to_string()))?
            .to_vec();
        Ok(Response { status, body })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// UI-side effects the client triggers. The web frontend installs an
/// implementation that toasts and redirects; tests install recorders.
pub trait ClientHooks {
    fn notify(&self, level: NoticeLevel, message: &str);
    /// The session was forcibly ended by a 401. The token is already
    /// cleared when this fires; the UI resets its session state and
    /// navigates to the login view.
    fn session_expired(&self);
}

/// Hooks that only log. Installed until the UI provides real ones.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogHooks;

impl ClientHooks for LogHooks {
    fn notify(&self, level: NoticeLevel, message: &str) {
        tracing::info!(?level, message, "notification");
    }

    fn session_expired(&self) {}
}

pub struct ApiClient<T> {
    base_url: String,
    transport: T,
    tokens: TokenCell,
    session: SessionCell,
    hooks: Arc<dyn ClientHooks>,
}

impl<T: Clone> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            transport: self.transport.clone(),
            tokens: self.tokens.clone(),
            session: self.session.clone(),
            hooks: self.hooks.clone(),
        }
    }
}

/// The client the application uses.
pub type Client = ApiClient<HttpTransport>;

impl Client {
    pub fn new(config: &AppConfig, tokens: TokenCell) -> Self {
        Self::with_transport(HttpTransport::default(), config, tokens)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(transport: T, config: &AppConfig, tokens: TokenCell) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            transport,
            tokens,
            session: SessionCell::default(),
            hooks: Arc::new(LogHooks),
        }
    }

    /// Install the UI-side effect hooks.
    pub fn with_hooks(mut self, hooks: Arc<dyn ClientHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn tokens(&self) -> &TokenCell {
        &self.tokens
    }

    /// The session register this client's 401 policy transitions. The
    /// [`crate::auth::SessionStore`] wrapping this client shares it.
    pub fn session(&self) -> &SessionCell {
        &self.session
    }

    pub async fn get<D: DeserializeOwned>(&self, path: &str) -> Result<D, ApiError> {
        self.get_with(path, Vec::new()).await
    }

    pub async fn get_with<D: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<D, ApiError> {
        let response = self.execute(Method::Get, path, query, Body::Empty).await?;
        self.decode(&response)
    }

    pub async fn post<B: Serialize, D: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<D, ApiError> {
        let response = self
            .execute(Method::Post, path, Vec::new(), json_body(body)?)
            .await?;
        self.decode(&response)
    }

    pub async fn post_form<D: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<D, ApiError> {
        let fields = fields
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        let response = self
            .execute(Method::Post, path, Vec::new(), Body::Form(fields))
            .await?;
        self.decode(&response)
    }

    pub async fn put<B: Serialize, D: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<D, ApiError> {
        let response = self
            .execute(Method::Put, path, Vec::new(), json_body(body)?)
            .await?;
        self.decode(&response)
    }

    /// DELETE, discarding whatever confirmation body the backend returns.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::Delete, path, Vec::new(), Body::Empty)
            .await?;
        Ok(())
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: Body,
    ) -> Result<Response, ApiError> {
        let request = Request {
            method,
            url: format!("{}{}", self.base_url, path),
            query,
            body,
            bearer: self.tokens.get(),
        };
        tracing::debug!(method = method.as_str(), path, "api request");

        match self.transport.send(request).await {
            Ok(response) if (200..300).contains(&response.status) => Ok(response),
            Ok(response) => {
                let error = classify(response.status, &response.body);
                self.apply_error_policy(path, &error);
                Err(error)
            }
            Err(failure) => {
                let error = ApiError::Network(failure.to_string());
                self.apply_error_policy(path, &error);
                Err(error)
            }
        }
    }

    fn decode<D: DeserializeOwned>(&self, response: &Response) -> Result<D, ApiError> {
        serde_json::from_slice(&response.body).map_err(|e| {
            tracing::error!(error = %e, "malformed response body");
            let error = ApiError::Unexpected;
            self.hooks.notify(NoticeLevel::Error, &error.to_string());
            error
        })
    }

    fn apply_error_policy(&self, path: &str, error: &ApiError) {
        tracing::warn!(path, %error, "api request failed");
        match error {
            ApiError::Authentication(_) => {
                self.tokens.clear();
                // The first request to observe the expiry performs the
                // transition; concurrent 401s in the same batch stay
                // silent. A rejected login runs while the session is
                // already Unauthenticated, so it never toasts here.
                if self.session.expire() {
                    self.hooks.notify(
                        NoticeLevel::Error,
                        "Your session has expired. Please sign in again.",
                    );
                    self.hooks.session_expired();
                }
            }
            other => self.hooks.notify(NoticeLevel::Error, &other.to_string()),
        }
    }
}

fn json_body<B: Serialize>(body: &B) -> Result<Body, ApiError> {
    serde_json::to_value(body)
        .map(Body::Json)
        .map_err(|_| ApiError::Unexpected)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use store::{AppConfig, MemoryStorage, TokenCell};

    use super::*;
    use crate::testing::{RecordingHooks, StubTransport};

    fn client_fixture() -> (ApiClient<StubTransport>, StubTransport, RecordingHooks) {
        let tokens = TokenCell::new(Arc::new(MemoryStorage::new()));
        let transport = StubTransport::new();
        let hooks = RecordingHooks::default();
        let config = AppConfig::default().with_api_base_url("/api/v1");
        let client = ApiClient::with_transport(transport.clone(), &config, tokens)
            .with_hooks(Arc::new(hooks.clone()));
        (client, transport, hooks)
    }

    #[tokio::test]
    async fn token_is_read_at_send_time_not_capture_time() {
        let (client, transport, _) = client_fixture();
        transport.push_json(200, "[]");
        transport.push_json(200, "[]");

        // First request goes out bare, the token appears afterwards, and
        // the same client instance must pick it up.
        let _: serde_json::Value = client.get("/incomes").await.unwrap();
        client.tokens().set("tok-late");
        let _: serde_json::Value = client.get("/incomes").await.unwrap();

        let sent = transport.sent();
        assert_eq!(sent[0].bearer, None);
        assert_eq!(sent[1].bearer.as_deref(), Some("tok-late"));
    }

    #[tokio::test]
    async fn forbidden_notifies_once_and_propagates() {
        let (client, transport, hooks) = client_fixture();
        transport.push_json(403, r#"{"detail": "nope"}"#);

        let result: Result<serde_json::Value, _> = client.get("/incomes").await;
        assert_eq!(result.unwrap_err(), ApiError::Authorization);
        let notices = hooks.notices();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].1.contains("permission"));
        assert_eq!(hooks.expirations(), 0);
    }

    #[tokio::test]
    async fn delete_404_surfaces_not_found_and_rejects() {
        let (client, transport, hooks) = client_fixture();
        transport.push_json(404, r#"{"detail": "Gasto no encontrado"}"#);

        let result = client.delete("/expenses/999").await;
        assert_eq!(result.unwrap_err(), ApiError::NotFound);
        let notices = hooks.notices();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].1.contains("not found"));
    }

    #[tokio::test]
    async fn server_errors_notify_generically() {
        let (client, transport, hooks) = client_fixture();
        transport.push_json(500, "oops");

        let result: Result<serde_json::Value, _> = client.get("/dashboard").await;
        assert_eq!(result.unwrap_err(), ApiError::Server(500));
        assert!(hooks.notices()[0].1.contains("Server error"));
    }

    #[tokio::test]
    async fn structured_detail_shown_verbatim() {
        let (client, transport, hooks) = client_fixture();
        transport.push_json(400, r#"{"detail": "Amount must be positive"}"#);

        let result: Result<serde_json::Value, _> =
            client.post("/goals/1/contribute", &serde_json::json!({"amount": -5})).await;
        assert_eq!(
            result.unwrap_err(),
            ApiError::Message("Amount must be positive".to_string())
        );
        assert_eq!(hooks.notices()[0].1, "Amount must be positive");
    }

    #[tokio::test]
    async fn network_failure_notifies_connectivity() {
        let (client, transport, hooks) = client_fixture();
        transport.push_network_failure();

        let result: Result<serde_json::Value, _> = client.get("/incomes").await;
        assert!(matches!(result.unwrap_err(), ApiError::Network(_)));
        assert!(hooks.notices()[0].1.contains("Connection error"));
    }

    #[tokio::test]
    async fn malformed_success_body_is_unexpected() {
        let (client, transport, hooks) = client_fixture();
        transport.push_json(200, "not json");

        let result: Result<Vec<i64>, _> = client.get("/incomes").await;
        assert_eq!(result.unwrap_err(), ApiError::Unexpected);
        assert_eq!(hooks.notices().len(), 1);
    }

    #[tokio::test]
    async fn query_parameters_are_forwarded() {
        let (client, transport, _) = client_fixture();
        transport.push_json(200, "[]");

        let _: serde_json::Value = client
            .get_with(
                "/incomes",
                vec![("income_type".to_string(), "salary".to_string())],
            )
            .await
            .unwrap();

        let sent = transport.sent();
        assert_eq!(sent[0].query, vec![("income_type".to_string(), "salary".to_string())]);
        assert_eq!(sent[0].url, "/api/v1/incomes");
    }
}
