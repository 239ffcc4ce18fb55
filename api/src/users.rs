//! Profile maintenance operations.

use crate::client::{ApiClient, Transport};
use crate::endpoints;
use crate::error::ApiError;
use crate::models::{PasswordChange, UserProfile, UserUpdate};

/// Update profile fields. Callers follow a confirmed update with
/// [`crate::auth::SessionStore::update_user`] to refresh the cached copy.
pub async fn update_profile<T: Transport>(
    client: &ApiClient<T>,
    id: i64,
    changes: &UserUpdate,
) -> Result<UserProfile, ApiError> {
    client.put(&endpoints::user(id), changes).await
}

/// Change the password; the backend verifies the current one.
pub async fn change_password<T: Transport>(
    client: &ApiClient<T>,
    id: i64,
    current_password: &str,
    new_password: &str,
) -> Result<UserProfile, ApiError> {
    client
        .put(
            &endpoints::user(id),
            &PasswordChange {
                password: new_password.to_string(),
                current_password: current_password.to_string(),
            },
        )
        .await
}
