//! # Error taxonomy for backend calls
//!
//! Every failed request is classified into exactly one [`ApiError`]
//! variant by [`classify`], which mirrors the interceptor dispatch table:
//! status buckets first (401, 403, 404, 5xx), then structured payloads
//! (409 conflict, 422 field errors, any `detail` message), then the
//! generic fallback. Evaluation is top-to-bottom, first match wins: a
//! 401 never falls through to the `detail` branch.
//!
//! `Display` strings double as the user-facing notification copy, so the
//! client can toast `error.to_string()` verbatim.

use serde::Deserialize;

/// A single invalid field reported by the backend (HTTP 422).
#[derive(Clone, Debug, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Bad credentials or an expired/invalid token (HTTP 401). Carries the
    /// backend's own message so login forms can show it verbatim.
    #[error("{0}")]
    Authentication(String),
    /// HTTP 403.
    #[error("You don't have permission to perform this action.")]
    Authorization,
    /// HTTP 404.
    #[error("The requested resource was not found.")]
    NotFound,
    /// HTTP 422 with field-level messages.
    #[error("{}", validation_summary(.0))]
    Validation(Vec<FieldError>),
    /// HTTP 409, e.g. duplicate username or email.
    #[error("{0}")]
    Conflict(String),
    /// HTTP 5xx.
    #[error("Server error. Please try again later.")]
    Server(u16),
    /// No response was received at all.
    #[error("Connection error. Check your internet connection.")]
    Network(String),
    /// Any other status that carried a structured `detail` message,
    /// surfaced verbatim.
    #[error("{0}")]
    Message(String),
    #[error("An unexpected error occurred.")]
    Unexpected,
}

impl ApiError {
    /// Field-level messages, if this is a validation error.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            ApiError::Validation(errors) => errors,
            _ => &[],
        }
    }
}

fn validation_summary(errors: &[FieldError]) -> String {
    match errors.first() {
        Some(first) => format!("{}: {}", first.field, first.message),
        None => "Some fields are invalid.".to_string(),
    }
}

/// Map a non-2xx HTTP outcome to an [`ApiError`].
pub(crate) fn classify(status: u16, body: &[u8]) -> ApiError {
    match status {
        401 => ApiError::Authentication(
            detail_message(body)
                .unwrap_or_else(|| "Your session has expired. Please sign in again.".to_string()),
        ),
        403 => ApiError::Authorization,
        404 => ApiError::NotFound,
        500..=599 => ApiError::Server(status),
        409 => ApiError::Conflict(
            detail_message(body).unwrap_or_else(|| "The resource already exists.".to_string()),
        ),
        422 => match field_errors(body) {
            Some(errors) if !errors.is_empty() => ApiError::Validation(errors),
            _ => detail_message(body)
                .map(ApiError::Message)
                .unwrap_or(ApiError::Unexpected),
        },
        _ => detail_message(body)
            .map(ApiError::Message)
            .unwrap_or(ApiError::Unexpected),
    }
}

#[derive(Deserialize)]
struct DetailPayload {
    detail: serde_json::Value,
}

/// Extract a `{"detail": "..."}` message if the body has one.
fn detail_message(body: &[u8]) -> Option<String> {
    let payload: DetailPayload = serde_json::from_slice(body).ok()?;
    match payload.detail {
        serde_json::Value::String(message) => Some(message),
        _ => None,
    }
}

#[derive(Deserialize)]
struct RawFieldError {
    loc: Vec<serde_json::Value>,
    msg: String,
}

/// Extract field-level errors from a 422 body
/// (`{"detail": [{"loc": ["body", "email"], "msg": "..."}]}`).
fn field_errors(body: &[u8]) -> Option<Vec<FieldError>> {
    let payload: DetailPayload = serde_json::from_slice(body).ok()?;
    let raw: Vec<RawFieldError> = serde_json::from_value(payload.detail).ok()?;
    Some(
        raw.into_iter()
            .map(|entry| FieldError {
                field: entry
                    .loc
                    .last()
                    .and_then(|segment| segment.as_str().map(str::to_string))
                    .unwrap_or_else(|| "field".to_string()),
                message: entry.msg,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_buckets_win_over_detail() {
        // A 401 with a detail payload must classify as Authentication,
        // never fall through to the Message branch.
        let body = br#"{"detail": "Incorrect username or password"}"#;
        assert_eq!(
            classify(401, body),
            ApiError::Authentication("Incorrect username or password".to_string())
        );
        assert_eq!(classify(403, body), ApiError::Authorization);
        assert_eq!(classify(404, body), ApiError::NotFound);
        assert_eq!(classify(500, body), ApiError::Server(500));
        assert_eq!(classify(503, body), ApiError::Server(503));
    }

    #[test]
    fn detail_message_shown_verbatim() {
        let body = br#"{"detail": "The user with this username already exists"}"#;
        assert_eq!(
            classify(400, body),
            ApiError::Message("The user with this username already exists".to_string())
        );
    }

    #[test]
    fn unprocessable_entity_yields_field_errors() {
        let body = br#"{"detail": [{"loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error"}]}"#;
        let error = classify(422, body);
        let fields = error.field_errors();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].field, "email");
        assert_eq!(fields[0].message, "value is not a valid email address");
    }

    #[test]
    fn garbage_body_falls_back_to_unexpected() {
        assert_eq!(classify(418, b"not json"), ApiError::Unexpected);
    }
}
