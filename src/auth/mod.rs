mod api_key;

pub use api_key::ApiKeyProvider;

use crate::errors::OpenAIResult;
use async_trait::async_trait;
use http::HeaderMap;

/// Applies authentication to outgoing request headers.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn apply_auth(&self, headers: &mut HeaderMap) -> OpenAIResult<()>;
}
