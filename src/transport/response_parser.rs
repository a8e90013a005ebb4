use crate::errors::{ErrorMapper, OpenAIError, OpenAIErrorResponse, OpenAIResult};
use bytes::Bytes;
use reqwest::Response;

pub struct ResponseParser;

impl ResponseParser {
    /// Parses a successful response body as JSON; maps error statuses
    /// through the remote error envelope.
    pub async fn parse_json_response(response: Response) -> OpenAIResult<serde_json::Value> {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            serde_json::from_slice(&body).map_err(|e| {
                OpenAIError::Deserialization(format!(
                    "Failed to deserialize response: {}. Body: {}",
                    e,
                    String::from_utf8_lossy(&body)
                ))
            })
        } else {
            let error_response: Option<OpenAIErrorResponse> = response.json().await.ok();
            Err(ErrorMapper::map_status_code(status.as_u16(), error_response))
        }
    }

    /// Returns the raw body bytes of a successful response.
    pub async fn parse_bytes_response(response: Response) -> OpenAIResult<Bytes> {
        let status = response.status();

        if status.is_success() {
            Ok(response.bytes().await?)
        } else {
            let error_response: Option<OpenAIErrorResponse> = response.json().await.ok();
            Err(ErrorMapper::map_status_code(status.as_u16(), error_response))
        }
    }

    /// Decodes an already-fetched JSON value into a typed response.
    pub fn decode<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> OpenAIResult<T> {
        serde_json::from_value(value).map_err(|e| {
            OpenAIError::Deserialization(format!("Failed to decode response: {}", e))
        })
    }
}
