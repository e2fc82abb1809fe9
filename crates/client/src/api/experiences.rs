#![allow(missing_docs)]

//! Farmer experience operations.

use super::ApiClient;
use crate::{error::Result, models::Experience};

impl ApiClient {
    pub async fn experiences(&self) -> Result<Vec<Experience>> {
        self.get_json("/experiences").await
    }

    pub async fn experience(&self, id: i64) -> Result<Experience> {
        self.get_json(&format!("/experiences/{id}")).await
    }

    /// Experiences posted for one crop.
    pub async fn experiences_for_crop(&self, crop_id: i64) -> Result<Vec<Experience>> {
        self.get_json(&format!("/experiences/crop/{crop_id}")).await
    }

    /// Experiences posted by one user.
    pub async fn experiences_for_user(&self, user_id: i64) -> Result<Vec<Experience>> {
        self.get_json(&format!("/experiences/user/{user_id}")).await
    }

    /// Most-helpful experiences, ranked server-side.
    pub async fn top_experiences(&self) -> Result<Vec<Experience>> {
        self.get_json("/experiences/top").await
    }

    pub async fn create_experience(&self, experience: &Experience) -> Result<Experience> {
        self.post_json("/experiences", experience).await
    }

    pub async fn update_experience(&self, id: i64, experience: &Experience) -> Result<Experience> {
        self.put_json(&format!("/experiences/{id}"), experience).await
    }

    pub async fn delete_experience(&self, id: i64) -> Result<()> {
        self.delete(&format!("/experiences/{id}")).await
    }

    /// Ask the server to increment the helpful counter. The count is owned
    /// by the server; re-fetch the experience to observe the new value.
    pub async fn mark_helpful(&self, id: i64) -> Result<()> {
        self.post_empty(&format!("/experiences/{id}/helpful")).await
    }
}
