//! Local session cache and the login/signup/logout flows around it.

mod auth;
mod store;

pub use auth::{Authenticator, SignupForm, SignupOutcome};
pub use store::{Session, SessionStore};
