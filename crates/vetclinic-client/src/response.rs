use async_trait::async_trait;
use reqwest::Response;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};

/// Shape of the service's error bodies: `{"error": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[async_trait]
pub(crate) trait ResponseExt {
    async fn map_client_error(self) -> Result<Response>;
}

#[async_trait]
impl ResponseExt for Response {
    async fn map_client_error(self) -> Result<Response> {
        let status = self.status();
        if status.is_success() {
            return Ok(self);
        }

        let body = self.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty());

        Err(ClientError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ResponseExt for std::result::Result<Response, reqwest::Error> {
    async fn map_client_error(self) -> Result<Response> {
        match self {
            Ok(response) => response.map_client_error().await,
            Err(e) => Err(ClientError::Transport(e)),
        }
    }
}

/// Read the body and decode it, tagging decode failures with the operation.
pub(crate) async fn decode<T>(response: Response, operation: &'static str) -> Result<T>
where
    T: DeserializeOwned,
{
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode {
        operation,
        details: e.to_string(),
    })
}

/// Decode a list body; the service answers `null` when there are no rows.
pub(crate) async fn decode_list<T>(response: Response, operation: &'static str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let list: Option<Vec<T>> = decode(response, operation).await?;
    Ok(list.unwrap_or_default())
}
