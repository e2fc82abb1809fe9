#![allow(missing_docs)]

//! User directory operations.

use super::ApiClient;
use crate::{error::Result, models::User};

impl ApiClient {
    pub async fn users(&self) -> Result<Vec<User>> {
        self.get_json("/users").await
    }

    pub async fn user(&self, id: i64) -> Result<User> {
        self.get_json(&format!("/users/{id}")).await
    }

    /// Look up an account by its unique username.
    pub async fn user_by_username(&self, username: &str) -> Result<User> {
        self.get_json(&format!("/users/username/{}", Self::segment(username)))
            .await
    }

    pub async fn create_user(&self, user: &User) -> Result<User> {
        self.post_json("/users", user).await
    }

    pub async fn update_user(&self, id: i64, user: &User) -> Result<User> {
        self.put_json(&format!("/users/{id}"), user).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<()> {
        self.delete(&format!("/users/{id}")).await
    }

    /// Farmers whose accounts carry the verified flag.
    pub async fn verified_farmers(&self) -> Result<Vec<User>> {
        self.get_json("/users/verified-farmers").await
    }

    pub async fn users_by_region(&self, region: &str) -> Result<Vec<User>> {
        self.get_json(&format!("/users/region/{}", Self::segment(region)))
            .await
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
    async fn username_lookup_encodes_the_segment() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/username/ravi%20kumar"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 3,
                "username": "ravi kumar",
                "fullName": "Ravi Kumar",
                "email": "ravi@example.com",
                "phoneNumber": "9876500000",
                "region": "Punjab",
                "role": "FARMER"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server).await;
        let user = client.user_by_username("ravi kumar").await?;
        assert_eq!(user.full_name, "Ravi Kumar");
        Ok(())
    }
}
