use reqwest::{header, Client, StatusCode};
use serde_json::Value;
use url::Url;

use crate::data::read_json;
use crate::error::ApiError;

/// Thin client for the k-means clustering service. The service is opaque:
/// responses are handed back as raw JSON for the renderer to interpret.
pub struct KmeansClient {
    client: Client,
}

impl KmeansClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// POST a sale record to the save endpoint
    pub async fn save(&self, url: Url, payload: &Value) -> Result<(StatusCode, Value), ApiError> {
        let response = self
            .client
            .post(url)
            .header(header::ACCEPT, "application/json")
            .json(payload)
            .send()
            .await?;

        read_json(response).await
    }

    /// GET previously clustered results
    pub async fn fetch(&self, url: Url) -> Result<(StatusCode, Value), ApiError> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        read_json(response).await
    }
}

impl Default for KmeansClient {
    fn default() -> Self {
        Self::new()
    }
}
