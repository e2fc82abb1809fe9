//! Login, signup and logout flows.
//!
//! The raw `/auth` endpoints never touch local state; this module is where
//! the session store gets written, so storage is explicit and symmetric
//! across login and signup instead of being scattered over call-sites.

use tracing::{info, warn};

use crate::{
    api::ApiClient,
    error::{Error, Result},
    models::{AuthResponse, Credentials, Role, SignupRequest, User},
    session::SessionStore,
};

/// Shortest password the signup form accepts.
const MIN_PASSWORD_LEN: usize = 6;

/// Signup form as filled in by a user, including the confirmation field
/// that never leaves the client.
#[allow(missing_docs)]
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub email: String,
    pub full_name: String,
    pub phone_number: String,
    pub location: Option<String>,
    pub region: String,
    pub role: Role,
    pub years_of_experience: Option<i32>,
    pub specialization: Option<String>,
}

impl SignupForm {
    /// Client-side checks performed before any request is made.
    pub fn validate(&self) -> Result<()> {
        if self.password != self.confirm_password {
            return Err(Error::Validation("Passwords do not match".to_string()));
        }
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(Error::Validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters long"
            )));
        }
        Ok(())
    }

    fn into_request(self) -> SignupRequest {
        SignupRequest {
            username: self.username,
            password: self.password,
            email: self.email,
            full_name: self.full_name,
            phone_number: self.phone_number,
            location: self.location,
            region: self.region,
            role: self.role,
            years_of_experience: self.years_of_experience,
            specialization: self.specialization,
        }
    }
}

/// Result of a signup attempt.
#[derive(Debug, Clone)]
pub enum SignupOutcome {
    /// Account created and the auto-login stored a session.
    SignedIn(User),
    /// Account created but the follow-up login did not complete; the user
    /// must log in manually.
    AccountCreated {
        /// Server message from the failed login, when one was returned.
        message: Option<String>,
    },
    /// The server refused the signup.
    Rejected {
        /// Server-provided reason, e.g. a taken username.
        message: Option<String>,
    },
}

/// Couples the API client with the session store for the account flows.
#[derive(Debug, Clone)]
pub struct Authenticator {
    api: ApiClient,
    store: SessionStore,
}

impl Authenticator {
    /// Build from an API client and a session store.
    pub fn new(api: ApiClient, store: SessionStore) -> Self {
        Self { api, store }
    }

    /// The underlying resource client.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// The underlying session store.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Log in and, on success, cache the returned user.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse> {
        let response = self.api.login(credentials).await?;
        if response.success {
            if let Some(user) = &response.user {
                self.store.store(user)?;
                info!("session stored for {}", user.username);
            }
        }
        Ok(response)
    }

    /// Validate, register, then auto-login with the same credentials.
    pub async fn signup(&self, form: SignupForm) -> Result<SignupOutcome> {
        form.validate()?;

        let credentials = Credentials {
            username: form.username.clone(),
            password: form.password.clone(),
        };
        let response = self.api.signup(&form.into_request()).await?;
        if !response.success {
            return Ok(SignupOutcome::Rejected {
                message: response.message,
            });
        }

        match self.login(&credentials).await {
            Ok(AuthResponse {
                success: true,
                user: Some(user),
                ..
            }) => Ok(SignupOutcome::SignedIn(user)),
            Ok(login) => Ok(SignupOutcome::AccountCreated {
                message: login.message,
            }),
            Err(err) => {
                warn!("auto-login after signup failed: {err}");
                Ok(SignupOutcome::AccountCreated { message: None })
            }
        }
    }

    /// Clear the local session, then notify the server best-effort. The
    /// local removal stands even when the notification fails.
    pub async fn logout(&self) -> Result<()> {
        self.store.clear()?;
        if let Err(err) = self.api.notify_logout().await {
            warn!("server logout notification failed: {err}");
        }
        Ok(())
    }

    /// Passthrough to the change-password endpoint.
    pub async fn change_password(
        &self,
        user_id: i64,
        old_password: &str,
        new_password: &str,
    ) -> Result<()> {
        self.api
            .change_password(user_id, old_password, new_password)
            .await
    }
}
