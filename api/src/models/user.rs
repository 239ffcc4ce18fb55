//! # User model and auth payloads
//!
//! [`UserProfile`] is the backend's user record as served by `/auth/me`;
//! the session store keeps a cached copy for display and optimistic local
//! edits, but the backend owns it. [`Token`] is the login response of the
//! OAuth2 password-grant flow. [`RegisterRequest`] / [`UserUpdate`] /
//! [`PasswordChange`] are the outgoing payloads for account creation and
//! profile maintenance.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub is_superuser: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl UserProfile {
    /// Display name, falling back to the username.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.username)
    }

    /// Merge confirmed profile edits into the cached copy.
    pub fn merge(&mut self, update: &UserUpdate) {
        if let Some(email) = &update.email {
            self.email = email.clone();
        }
        if let Some(username) = &update.username {
            self.username = username.clone();
        }
        if let Some(full_name) = &update.full_name {
            self.full_name = Some(full_name.clone());
        }
    }
}

/// Login response: the bearer credential.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub password: String,
}

/// Partial profile edit. Only the present fields are sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Password change payload; the backend verifies the current password.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PasswordChange {
    pub password: String,
    pub current_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            id: 1,
            email: "juan@example.com".to_string(),
            username: "juan".to_string(),
            full_name: None,
            is_active: true,
            is_superuser: false,
            created_at: chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn merge_updates_given_fields_only() {
        let mut user = profile();
        user.merge(&UserUpdate {
            full_name: Some("X".to_string()),
            ..Default::default()
        });
        assert_eq!(user.full_name.as_deref(), Some("X"));
        assert_eq!(user.username, "juan");
        assert_eq!(user.email, "juan@example.com");
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let mut user = profile();
        assert_eq!(user.display_name(), "juan");
        user.full_name = Some("Juan Pérez".to_string());
        assert_eq!(user.display_name(), "Juan Pérez");
    }

    #[test]
    fn partial_update_serializes_present_fields_only() {
        let update = UserUpdate {
            full_name: Some("X".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"full_name":"X"}"#);
    }
}
