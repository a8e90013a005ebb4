use crate::client::OpenAIConfig;
use crate::errors::{NetworkError, OpenAIError, OpenAIResult};
use crate::transport::{HttpTransport, ResponseParser};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use url::Url;

/// HTTP transport implementation using reqwest
pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
    default_headers: HeaderMap,
}

impl ReqwestTransport {
    /// Creates a new ReqwestTransport from configuration
    pub fn new(config: &OpenAIConfig) -> OpenAIResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| {
                OpenAIError::Network(NetworkError::ConnectionFailed(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            default_headers: HeaderMap::new(),
        })
    }

    /// Sets default headers to include in all requests
    pub fn with_default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers = headers;
        self
    }

    fn build_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    fn merge_headers(&self, request_headers: HeaderMap) -> HeaderMap {
        let mut headers = self.default_headers.clone();
        for (key, value) in request_headers.iter() {
            headers.insert(key.clone(), value.clone());
        }
        headers
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        headers: HeaderMap,
    ) -> OpenAIResult<serde_json::Value> {
        let url = self.build_url(path);
        let mut request = self.client.request(method, &url);

        for (key, value) in self.merge_headers(headers).iter() {
            request = request.header(key, value);
        }

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        ResponseParser::parse_json_response(response).await
    }

    async fn upload_file(
        &self,
        path: &str,
        file_data: Bytes,
        file_name: &str,
        purpose: &str,
        headers: HeaderMap,
    ) -> OpenAIResult<serde_json::Value> {
        let url = self.build_url(path);

        let file_part = Part::bytes(file_data.to_vec())
            .file_name(file_name.to_string())
            .mime_str("application/octet-stream")
            .map_err(|e| OpenAIError::Serialization(format!("Invalid MIME type: {}", e)))?;
        let form = Form::new()
            .part("file", file_part)
            .text("purpose", purpose.to_string());

        let mut request = self.client.post(&url).multipart(form);
        for (key, value) in self.merge_headers(headers).iter() {
            request = request.header(key, value);
        }

        let response = request.send().await?;
        ResponseParser::parse_json_response(response).await
    }

    async fn download_file(&self, path: &str, headers: HeaderMap) -> OpenAIResult<Bytes> {
        let url = self.build_url(path);

        let mut request = self.client.get(&url);
        for (key, value) in self.merge_headers(headers).iter() {
            request = request.header(key, value);
        }

        let response = request.send().await?;
        ResponseParser::parse_bytes_response(response).await
    }
}
