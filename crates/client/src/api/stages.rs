//! Crop growth stage operations.

use super::ApiClient;
use crate::{error::Result, models::CropStage};

impl ApiClient {
    /// Fetch every stage across all crops.
    pub async fn stages(&self) -> Result<Vec<CropStage>> {
        self.get_json("/crop-stages").await
    }

    /// Fetch one stage by id.
    pub async fn stage(&self, id: i64) -> Result<CropStage> {
        self.get_json(&format!("/crop-stages/{id}")).await
    }

    /// All stages belonging to one crop, in stage order.
    pub async fn stages_for_crop(&self, crop_id: i64) -> Result<Vec<CropStage>> {
        self.get_json(&format!("/crop-stages/crop/{crop_id}")).await
    }

    /// Create a stage; the payload references its crop by `{id}` only.
    pub async fn create_stage(&self, stage: &CropStage) -> Result<CropStage> {
        self.post_json("/crop-stages", stage).await
    }

    /// Replace a stage wholesale.
    pub async fn update_stage(&self, id: i64, stage: &CropStage) -> Result<CropStage> {
        self.put_json(&format!("/crop-stages/{id}"), stage).await
    }

    /// Delete a stage.
    pub async fn delete_stage(&self, id: i64) -> Result<()> {
        self.delete(&format!("/crop-stages/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::tests::client_for;
    use anyhow::Result;
    use serde_json::json;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    #[tokio::test]
    async fn stages_for_crop_hits_the_nested_path() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/crop-stages/crop/12"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": 1,
                    "crop": {"id": 12},
                    "stageNumber": 1,
                    "stageName": "Land Preparation",
                    "durationDays": 10
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let stages = client.stages_for_crop(12).await?;
        assert_eq!(stages.len(), 1);
        assert_eq!(stages[0].stage_name, "Land Preparation");
        assert_eq!(stages[0].crop.map(|c| c.id), Some(12));
        Ok(())
    }
}
