use crate::auth::AuthProvider;
use crate::errors::OpenAIResult;
use crate::services::chat::{ChatCompletionRequest, ChatCompletionResponse};
use crate::transport::{HttpTransport, ResponseParser};
use async_trait::async_trait;
use http::{HeaderMap, Method};
use std::sync::Arc;

#[async_trait]
pub trait ChatService: Send + Sync {
    async fn create(&self, request: ChatCompletionRequest) -> OpenAIResult<ChatCompletionResponse>;
}

pub struct ChatClient {
    transport: Arc<dyn HttpTransport>,
    auth: Arc<dyn AuthProvider>,
}

impl ChatClient {
    pub fn new(transport: Arc<dyn HttpTransport>, auth: Arc<dyn AuthProvider>) -> Self {
        Self { transport, auth }
    }
}

#[async_trait]
impl ChatService for ChatClient {
    async fn create(&self, request: ChatCompletionRequest) -> OpenAIResult<ChatCompletionResponse> {
        let mut headers = HeaderMap::new();
        self.auth.apply_auth(&mut headers).await?;

        let body = serde_json::to_value(&request)?;
        let value = self
            .transport
            .request(Method::POST, "/chat/completions", Some(body), headers)
            .await?;
        ResponseParser::decode(value)
    }
}
