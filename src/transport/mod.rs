mod http_transport;
mod response_parser;

pub use http_transport::ReqwestTransport;
pub use response_parser::ResponseParser;

use crate::errors::OpenAIResult;
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method};

/// HTTP seam between the services and the wire. Object-safe: bodies and
/// responses cross as `serde_json::Value`; services own the typed decode.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        headers: HeaderMap,
    ) -> OpenAIResult<serde_json::Value>;

    async fn upload_file(
        &self,
        path: &str,
        file_data: Bytes,
        file_name: &str,
        purpose: &str,
        headers: HeaderMap,
    ) -> OpenAIResult<serde_json::Value>;

    async fn download_file(&self, path: &str, headers: HeaderMap) -> OpenAIResult<Bytes>;
}
