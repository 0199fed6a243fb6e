pub mod apriori_api;
pub mod kmeans_api;
pub mod types;

use reqwest::{Response, StatusCode};
use serde_json::Value;

use crate::error::ApiError;

/// Shared response handling for both API clients: any non-2xx status is an
/// error carrying the status line, and the body must decode as JSON.
pub(crate) async fn read_json(response: Response) -> Result<(StatusCode, Value), ApiError> {
    let status = response.status();

    if !status.is_success() {
        return Err(ApiError::Http(status));
    }

    let body = response.json().await?;
    Ok((status, body))
}
