//! HTTP resource client for the marketplace REST API.
//!
//! Each method issues exactly one request and hands the decoded body (or the
//! error) straight back to the caller. There are no retries and no caching;
//! callers decide how failures surface.

mod auth;
mod crops;
mod experiences;
mod listings;
mod stages;
mod users;

use std::time::Duration;

use reqwest::{header, Client};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::ClientConfig,
    error::{Error, Result},
};

/// Typed client for the backend REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ClientConfig,
    http: Client,
}

impl ApiClient {
    /// Build a client from the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self { config, http })
    }

    /// Build a client from the layered configuration sources
    /// (defaults, config file, environment).
    pub fn from_config() -> Result<Self> {
        Self::new(ClientConfig::load()?)
    }

    /// Configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Percent-encode a value destined for a path segment.
    pub(crate) fn segment(value: &str) -> String {
        urlencoding::encode(value).into_owned()
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.http.get(self.url(path)).send().await?;
        decode(response).await
    }

    pub(crate) async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let response = self.http.get(self.url(path)).query(query).send().await?;
        decode(response).await
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        decode(response).await
    }

    pub(crate) async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let response = self.http.put(self.url(path)).json(body).send().await?;
        decode(response).await
    }

    /// POST with no body, discarding any response body.
    pub(crate) async fn post_empty(&self, path: &str) -> Result<()> {
        let response = self.http.post(self.url(path)).send().await?;
        check(response).await
    }

    /// POST with no body, parameters carried in the query string.
    pub(crate) async fn post_with_query(&self, path: &str, query: &[(&str, &str)]) -> Result<()> {
        let response = self.http.post(self.url(path)).query(query).send().await?;
        check(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let response = self.http.delete(self.url(path)).send().await?;
        check(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let response = reject_error_status(response).await?;
    Ok(response.json().await?)
}

async fn check(response: reqwest::Response) -> Result<()> {
    reject_error_status(response).await?;
    Ok(())
}

async fn reject_error_status(response: reqwest::Response) -> Result<reqwest::Response> {
    if !response.status().is_success() {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        return Err(Error::Http { status, message });
    }
    Ok(response)
}
