mod config;

pub use config::OpenAIConfig;

use crate::auth::{ApiKeyProvider, AuthProvider};
use crate::errors::OpenAIResult;
use crate::services::chat::ChatClient;
use crate::services::files::FilesClient;
use crate::transport::{HttpTransport, ReqwestTransport};
use std::sync::Arc;

/// Facade wiring the transport and auth layers to the per-endpoint clients.
pub struct OpenAIClient {
    files: FilesClient,
    chat: ChatClient,
}

impl OpenAIClient {
    pub fn new(config: OpenAIConfig) -> OpenAIResult<Self> {
        config.validate()?;

        let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new(&config)?);
        let mut auth = ApiKeyProvider::from_secret(config.api_key.clone());
        if let Some(org_id) = &config.organization_id {
            auth = auth.with_organization(org_id.clone());
        }
        let auth: Arc<dyn AuthProvider> = Arc::new(auth);

        Ok(Self {
            files: FilesClient::new(transport.clone(), auth.clone()),
            chat: ChatClient::new(transport, auth),
        })
    }

    /// Builds a client from `OPENAI_*` environment variables.
    pub fn from_env() -> OpenAIResult<Self> {
        Self::new(OpenAIConfig::from_env()?)
    }

    pub fn files(&self) -> &FilesClient {
        &self.files
    }

    pub fn chat(&self) -> &ChatClient {
        &self.chat
    }
}
