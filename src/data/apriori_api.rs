use reqwest::{header, Client, StatusCode};
use serde_json::Value;
use url::Url;

use crate::data::read_json;
use crate::data::types::RuleReport;
use crate::error::ApiError;

/// Thin client for the Apriori association-rule service.
pub struct AprioriClient {
    client: Client,
}

impl AprioriClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// GET mined rules, enforcing the expected response shape. A response
    /// without an array `reglas` field is a shape mismatch, not a success.
    /// The raw body is returned alongside the typed report for diagnostics.
    pub async fn fetch_rules(
        &self,
        url: Url,
    ) -> Result<(StatusCode, RuleReport, Value), ApiError> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let (status, raw) = read_json(response).await?;

        match raw.get("reglas") {
            Some(reglas) if reglas.is_array() => {
                let report = serde_json::from_value::<RuleReport>(raw.clone())
                    .map_err(|_| ApiError::UnexpectedFormat)?;
                Ok((status, report, raw))
            }
            _ => Err(ApiError::UnexpectedFormat),
        }
    }
}

impl Default for AprioriClient {
    fn default() -> Self {
        Self::new()
    }
}
