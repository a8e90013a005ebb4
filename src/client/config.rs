use crate::errors::{ConfigurationError, OpenAIError, OpenAIResult};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub struct OpenAIConfig {
    pub api_key: SecretString,
    pub base_url: Url,
    pub organization_id: Option<String>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl OpenAIConfig {
    /// Creates a new OpenAIConfig with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            base_url: default_base_url(),
            organization_id: None,
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }

    /// Creates a new OpenAIConfig from environment variables
    ///
    /// Reads the following environment variables:
    /// - OPENAI_API_KEY (required)
    /// - OPENAI_BASE_URL (optional, defaults to https://api.openai.com/v1)
    /// - OPENAI_ORGANIZATION_ID (optional)
    pub fn from_env() -> OpenAIResult<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            OpenAIError::Configuration(ConfigurationError::MissingApiKey(
                "OPENAI_API_KEY environment variable not found".to_string(),
            ))
        })?;

        let mut config = Self::new(api_key);

        if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
            let url = Url::parse(&base_url).map_err(|e| {
                OpenAIError::Configuration(ConfigurationError::InvalidBaseUrl(format!(
                    "Invalid OPENAI_BASE_URL: {}",
                    e
                )))
            })?;
            config.base_url = url;
        }

        if let Ok(org_id) = std::env::var("OPENAI_ORGANIZATION_ID") {
            config.organization_id = Some(org_id);
        }

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> OpenAIResult<()> {
        let api_key = self.api_key.expose_secret();

        if api_key.is_empty() {
            return Err(OpenAIError::Configuration(
                ConfigurationError::MissingApiKey("API key is empty".to_string()),
            ));
        }

        if api_key.len() < 10 {
            return Err(OpenAIError::Configuration(
                ConfigurationError::InvalidApiKeyFormat("API key is too short".to_string()),
            ));
        }

        if self.timeout.as_secs() == 0 {
            return Err(OpenAIError::Configuration(
                ConfigurationError::InvalidTimeout(
                    "Timeout must be greater than 0".to_string(),
                ),
            ));
        }

        Ok(())
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_organization_id(mut self, org_id: impl Into<String>) -> Self {
        self.organization_id = Some(org_id.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

fn default_base_url() -> Url {
    Url::parse("https://api.openai.com/v1").expect("default base URL is valid")
}

fn default_timeout() -> Duration {
    Duration::from_secs(60)
}

fn default_user_agent() -> String {
    format!("openai-kit/{}", env!("CARGO_PKG_VERSION"))
}
