#![allow(missing_docs)]

//! Worker and equipment marketplace listings.

use super::ApiClient;
use crate::{
    error::Result,
    models::{EquipmentListing, WorkerListing},
};

impl ApiClient {
    pub async fn workers(&self) -> Result<Vec<WorkerListing>> {
        self.get_json("/workers").await
    }

    pub async fn worker(&self, id: i64) -> Result<WorkerListing> {
        self.get_json(&format!("/workers/{id}")).await
    }

    pub async fn workers_by_region(&self, region: &str) -> Result<Vec<WorkerListing>> {
        self.get_json(&format!("/workers/region/{}", Self::segment(region)))
            .await
    }

    /// Workers in a region currently marked available.
    pub async fn available_workers(&self, region: &str) -> Result<Vec<WorkerListing>> {
        self.get_json(&format!("/workers/available/{}", Self::segment(region)))
            .await
    }

    /// Free-text search over worker skills.
    pub async fn search_workers(&self, skill: &str) -> Result<Vec<WorkerListing>> {
        self.get_json_with_query("/workers/search", &[("skill", skill)])
            .await
    }

    pub async fn create_worker_listing(&self, listing: &WorkerListing) -> Result<WorkerListing> {
        self.post_json("/workers", listing).await
    }

    pub async fn update_worker_listing(
        &self,
        id: i64,
        listing: &WorkerListing,
    ) -> Result<WorkerListing> {
        self.put_json(&format!("/workers/{id}"), listing).await
    }

    pub async fn delete_worker_listing(&self, id: i64) -> Result<()> {
        self.delete(&format!("/workers/{id}")).await
    }

    pub async fn equipment_listings(&self) -> Result<Vec<EquipmentListing>> {
        self.get_json("/equipment").await
    }

    pub async fn equipment(&self, id: i64) -> Result<EquipmentListing> {
        self.get_json(&format!("/equipment/{id}")).await
    }

    pub async fn equipment_by_region(&self, region: &str) -> Result<Vec<EquipmentListing>> {
        self.get_json(&format!("/equipment/region/{}", Self::segment(region)))
            .await
    }

    /// Equipment in a region currently marked available.
    pub async fn available_equipment(&self, region: &str) -> Result<Vec<EquipmentListing>> {
        self.get_json(&format!("/equipment/available/{}", Self::segment(region)))
            .await
    }

    /// Free-text search over equipment types.
    pub async fn search_equipment(&self, equipment_type: &str) -> Result<Vec<EquipmentListing>> {
        self.get_json_with_query("/equipment/search", &[("type", equipment_type)])
            .await
    }

    pub async fn create_equipment_listing(
        &self,
        listing: &EquipmentListing,
    ) -> Result<EquipmentListing> {
        self.post_json("/equipment", listing).await
    }

    pub async fn update_equipment_listing(
        &self,
        id: i64,
        listing: &EquipmentListing,
    ) -> Result<EquipmentListing> {
        self.put_json(&format!("/equipment/{id}"), listing).await
    }

    pub async fn delete_equipment_listing(&self, id: i64) -> Result<()> {
        self.delete(&format!("/equipment/{id}")).await
    }
}
