//! Raw authentication endpoints.
//!
//! These map one-to-one onto the backend's `/auth` routes and never touch
//! the local session; storage decisions belong to
//! [`Authenticator`](crate::session::Authenticator).

use super::ApiClient;
use crate::{
    error::Result,
    models::{AuthResponse, Credentials, SignupRequest, User},
};

impl ApiClient {
    /// Register a new account. The returned envelope reports success or a
    /// server-side reason (duplicate username, etc.).
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse> {
        self.post_json("/auth/signup", request).await
    }

    /// Exchange credentials for the account record.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse> {
        self.post_json("/auth/login", credentials).await
    }

    /// Tell the server a session ended. Callers treat this as best-effort.
    pub async fn notify_logout(&self) -> Result<()> {
        self.post_empty("/auth/logout").await
    }

    /// Fetch the canonical account record for an id.
    pub async fn auth_user(&self, user_id: i64) -> Result<User> {
        self.get_json(&format!("/auth/user/{user_id}")).await
    }

    /// Change an account password.
    ///
    /// The backend takes all three values as query parameters rather than a
    /// body, so they appear in the request line; intermediaries may log
    /// them. The values are at least percent-encoded here.
    pub async fn change_password(
        &self,
        user_id: i64,
        old_password: &str,
        new_password: &str,
    ) -> Result<()> {
        let user_id = user_id.to_string();
        self.post_with_query(
            "/auth/change-password",
            &[
                ("userId", user_id.as_str()),
                ("oldPassword", old_password),
                ("newPassword", new_password),
            ],
        )
        .await
    }
}
