#![warn(clippy::all, missing_docs)]

//! Data-access and session layer for the AgriGuide marketplace.
//!
//! This crate hosts the typed REST client for the backend API (crops,
//! growth stages, users, farmer experiences, worker and equipment
//! listings, auth) and the persistent single-user session cache used to
//! gate navigation and render identity. Presentation belongs to the
//! frontends built on top of it.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod session;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use models::{
    AuthResponse, Credentials, Crop, CropStage, EntityRef, EquipmentListing, Experience, Role,
    SignupRequest, User, WorkerListing,
};
pub use session::{Authenticator, Session, SessionStore, SignupForm, SignupOutcome};
