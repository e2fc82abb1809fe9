//! Wire entities exchanged with the marketplace backend.
//!
//! These records mirror the backend's JSON verbatim (camelCase field names,
//! server-assigned ids). The client does not validate or transform them.

#![allow(missing_docs)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimal `{id}` reference embedded when a payload points at another
/// entity. Mutating calls never nest full records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    /// Server-side identifier of the referenced entity.
    pub id: i64,
}

impl EntityRef {
    /// Reference an entity by id.
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

/// Account role assigned at signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Grows crops and posts experiences.
    Farmer,
    /// Offers labour through worker listings.
    Worker,
    /// Rents out machinery through equipment listings.
    EquipmentOwner,
}

/// Registered account as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(default)]
    pub location: Option<String>,
    pub region: String,
    pub role: Role,
    #[serde(default)]
    pub years_of_experience: Option<i32>,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub is_verified_farmer: bool,
}

/// Username/password pair for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Payload for `POST /auth/signup`. The password confirmation never goes
/// over the wire; it is checked client-side first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub full_name: String,
    pub phone_number: String,
    #[serde(default)]
    pub location: Option<String>,
    pub region: String,
    pub role: Role,
    #[serde(default)]
    pub years_of_experience: Option<i32>,
    #[serde(default)]
    pub specialization: Option<String>,
}

/// Envelope returned by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Cultivation guide for a single crop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crop {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub crop_name: String,
    #[serde(default)]
    pub scientific_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub soil_type: String,
    pub climate_condition: String,
    #[serde(default)]
    pub min_temperature: Option<f64>,
    #[serde(default)]
    pub max_temperature: Option<f64>,
    #[serde(default)]
    pub rainfall_requirement: Option<String>,
    #[serde(default)]
    pub growing_period_days: Option<i32>,
    #[serde(default)]
    pub estimated_investment: Option<f64>,
    #[serde(default)]
    pub expected_yield_per_acre: Option<f64>,
    #[serde(default)]
    pub expected_revenue_per_acre: Option<f64>,
    #[serde(default)]
    pub cultivation_steps: Option<String>,
    #[serde(default)]
    pub irrigation_requirement: Option<String>,
    #[serde(default)]
    pub pesticides_recommended: Option<String>,
    #[serde(default)]
    pub fertilizers_recommended: Option<String>,
    #[serde(default)]
    pub harvesting_season: Option<String>,
}

/// One stage of a crop's growing cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropStage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop: Option<EntityRef>,
    pub stage_number: i32,
    pub stage_name: String,
    #[serde(default)]
    pub duration_days: Option<i32>,
    #[serde(default)]
    pub activities: Option<String>,
    #[serde(default)]
    pub pesticides_used: Option<String>,
    #[serde(default)]
    pub fertilizers_used: Option<String>,
    #[serde(default)]
    pub watering_schedule: Option<String>,
}

/// A farmer's first-hand account of growing a crop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop: Option<EntityRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<EntityRef>,
    pub title: String,
    pub experience_text: String,
    #[serde(default)]
    pub years_growing: Option<i32>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub average_yield: Option<String>,
    #[serde(default)]
    pub tips_and_tricks: Option<String>,
    #[serde(default)]
    pub challenges_faced: Option<String>,
    /// Incremented server-side via the `helpful` action; never mutated
    /// locally.
    #[serde(default)]
    pub helpful_count: i64,
    #[serde(default)]
    pub posted_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_verified: bool,
}

/// Labour offered for hire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerListing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub worker_name: String,
    #[serde(default)]
    pub skill_set: Option<String>,
    #[serde(default)]
    pub experience_years: Option<i32>,
    pub region: String,
    #[serde(default)]
    pub specific_location: Option<String>,
    pub phone_number: String,
    #[serde(default)]
    pub daily_rate: Option<f64>,
    #[serde(default)]
    pub hourly_rate: Option<f64>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<EntityRef>,
}

/// Machinery offered for rent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentListing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub equipment_name: String,
    pub equipment_type: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    pub region: String,
    #[serde(default)]
    pub specific_location: Option<String>,
    pub phone_number: String,
    #[serde(default)]
    pub daily_rental_cost: Option<f64>,
    #[serde(default)]
    pub hourly_rental_cost: Option<f64>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub listed_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<EntityRef>,
}
