//! Crop guide operations.

use super::ApiClient;
use crate::{error::Result, models::Crop};

impl ApiClient {
    /// Fetch every crop guide.
    pub async fn crops(&self) -> Result<Vec<Crop>> {
        self.get_json("/crops").await
    }

    /// Fetch one crop by id.
    pub async fn crop(&self, id: i64) -> Result<Crop> {
        self.get_json(&format!("/crops/{id}")).await
    }

    /// Create a crop guide; the server assigns the id.
    pub async fn create_crop(&self, crop: &Crop) -> Result<Crop> {
        self.post_json("/crops", crop).await
    }

    /// Replace a crop guide wholesale.
    pub async fn update_crop(&self, id: i64, crop: &Crop) -> Result<Crop> {
        self.put_json(&format!("/crops/{id}"), crop).await
    }

    /// Delete a crop guide.
    pub async fn delete_crop(&self, id: i64) -> Result<()> {
        self.delete(&format!("/crops/{id}")).await
    }

    /// Free-text search on crop name.
    pub async fn search_crops(&self, name: &str) -> Result<Vec<Crop>> {
        self.get_json_with_query("/crops/search", &[("name", name)])
            .await
    }

    /// Crops suited to one soil type.
    pub async fn crops_by_soil(&self, soil_type: &str) -> Result<Vec<Crop>> {
        self.get_json(&format!("/crops/soil/{}", Self::segment(soil_type)))
            .await
    }

    /// Crops suited to one climate condition.
    pub async fn crops_by_climate(&self, climate: &str) -> Result<Vec<Crop>> {
        self.get_json(&format!("/crops/climate/{}", Self::segment(climate)))
            .await
    }

    /// Crops matching both a soil type and a climate condition.
    pub async fn suitable_crops(&self, soil_type: &str, climate: &str) -> Result<Vec<Crop>> {
        self.get_json_with_query("/crops/suitable", &[("soilType", soil_type), ("climate", climate)])
            .await
    }

    /// Search dispatch used by the crop-finder screen: blank filters count
    /// as absent, and the narrowest endpoint that still has all its inputs
    /// is the one that gets called.
    pub async fn find_crops(
        &self,
        soil_type: Option<&str>,
        climate: Option<&str>,
    ) -> Result<Vec<Crop>> {
        let soil_type = soil_type.map(str::trim).filter(|value| !value.is_empty());
        let climate = climate.map(str::trim).filter(|value| !value.is_empty());

        match (soil_type, climate) {
            (Some(soil), Some(climate)) => self.suitable_crops(soil, climate).await,
            (Some(soil), None) => self.crops_by_soil(soil).await,
            (None, Some(climate)) => self.crops_by_climate(climate).await,
            (None, None) => self.crops().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::api::tests::client_for;
    use crate::models::Crop;
    use anyhow::Result;
    use serde_json::json;
    use wiremock::{
        matchers::{body_json_string, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    fn sample_crop() -> Crop {
        Crop {
            id: None,
            crop_name: "Basmati Rice".to_string(),
            scientific_name: Some("Oryza sativa".to_string()),
            category: Some("Cereal".to_string()),
            description: None,
            soil_type: "Alluvial".to_string(),
            climate_condition: "Tropical".to_string(),
            min_temperature: Some(20.0),
            max_temperature: Some(37.0),
            rainfall_requirement: Some("100-200 cm".to_string()),
            growing_period_days: Some(120),
            estimated_investment: Some(25_000.0),
            expected_yield_per_acre: Some(2_200.0),
            expected_revenue_per_acre: Some(66_000.0),
            cultivation_steps: None,
            irrigation_requirement: Some("Flood irrigation".to_string()),
            pesticides_recommended: None,
            fertilizers_recommended: None,
            harvesting_season: Some("Kharif".to_string()),
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips_fields() -> Result<()> {
        let server = MockServer::start().await;
        let submitted = sample_crop();
        let mut stored = submitted.clone();
        stored.id = Some(42);

        Mock::given(method("POST"))
            .and(path("/crops"))
            .respond_with(ResponseTemplate::new(201).set_body_json(&stored))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/crops/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&stored))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let created = client.create_crop(&submitted).await?;
        let id = created.id.expect("server assigns id");
        let fetched = client.crop(id).await?;

        assert_eq!(fetched.crop_name, submitted.crop_name);
        assert_eq!(fetched.soil_type, submitted.soil_type);
        assert_eq!(fetched.expected_yield_per_acre, submitted.expected_yield_per_acre);
        Ok(())
    }

    #[tokio::test]
    async fn blank_soil_filter_falls_back_to_climate_endpoint() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/crops/climate/Tropical"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client.find_crops(Some(""), Some("Tropical")).await?;
        Ok(())
    }

    #[tokio::test]
    async fn no_filters_fetches_the_full_collection() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/crops"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        // Whitespace-only values count as absent filters.
        let client = client_for(&server).await;
        client.find_crops(None, Some("   ")).await?;
        Ok(())
    }

    #[tokio::test]
    async fn both_filters_use_the_combined_endpoint() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/crops/suitable"))
            .and(query_param("soilType", "Black Soil"))
            .and(query_param("climate", "Semi-Arid"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client
            .find_crops(Some("Black Soil"), Some("Semi-Arid"))
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn soil_path_segment_is_percent_encoded() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/crops/soil/Black%20Soil"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client.crops_by_soil("Black Soil").await?;
        Ok(())
    }

    #[tokio::test]
    async fn name_search_goes_through_the_query_string() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/crops/search"))
            .and(query_param("name", "rice & wheat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client.search_crops("rice & wheat").await?;
        Ok(())
    }

    #[tokio::test]
    async fn delete_ignores_the_response_body() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/crops/7"))
            .respond_with(ResponseTemplate::new(200).set_body_string("deleted"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client.delete_crop(7).await?;
        Ok(())
    }

    #[tokio::test]
    async fn update_sends_the_full_replacement_payload() -> Result<()> {
        let server = MockServer::start().await;
        let mut crop = sample_crop();
        crop.id = Some(5);
        let body = serde_json::to_string(&crop)?;

        Mock::given(method("PUT"))
            .and(path("/crops/5"))
            .and(body_json_string(&body))
            .respond_with(ResponseTemplate::new(200).set_body_json(&crop))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        client.update_crop(5, &crop).await?;
        Ok(())
    }
}
