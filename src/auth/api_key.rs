use crate::auth::AuthProvider;
use crate::errors::{AuthenticationError, OpenAIError, OpenAIResult};
use async_trait::async_trait;
use http::HeaderMap;
use secrecy::{ExposeSecret, SecretString};

/// Bearer-token provider carrying the API key.
pub struct ApiKeyProvider {
    api_key: SecretString,
    organization_id: Option<String>,
}

impl ApiKeyProvider {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            organization_id: None,
        }
    }

    pub fn from_secret(api_key: SecretString) -> Self {
        Self {
            api_key,
            organization_id: None,
        }
    }

    pub fn with_organization(mut self, org_id: impl Into<String>) -> Self {
        self.organization_id = Some(org_id.into());
        self
    }
}

#[async_trait]
impl AuthProvider for ApiKeyProvider {
    async fn apply_auth(&self, headers: &mut HeaderMap) -> OpenAIResult<()> {
        let api_key = self.api_key.expose_secret();

        if api_key.is_empty() {
            return Err(OpenAIError::Authentication(
                AuthenticationError::InvalidApiKey("API key is empty".to_string()),
            ));
        }

        let auth_value = format!("Bearer {}", api_key);
        headers.insert(
            "Authorization",
            auth_value.parse().map_err(|_| {
                OpenAIError::Authentication(AuthenticationError::InvalidApiKey(
                    "Failed to create Authorization header".to_string(),
                ))
            })?,
        );

        if let Some(org_id) = &self.organization_id {
            headers.insert(
                "OpenAI-Organization",
                org_id.parse().map_err(|_| {
                    OpenAIError::Authentication(AuthenticationError::Unauthorized(
                        "Invalid organization ID format".to_string(),
                    ))
                })?,
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_apply_auth_sets_bearer_header() {
        let provider = ApiKeyProvider::new("sk-test123456");
        let mut headers = HeaderMap::new();

        provider.apply_auth(&mut headers).await.unwrap();
        assert_eq!(
            headers.get("Authorization").unwrap(),
            "Bearer sk-test123456"
        );
    }

    #[tokio::test]
    async fn test_apply_auth_rejects_empty_key() {
        let provider = ApiKeyProvider::new("");
        let mut headers = HeaderMap::new();

        let result = provider.apply_auth(&mut headers).await;
        assert!(result.is_err());
        assert!(!headers.contains_key("Authorization"));
    }

    #[tokio::test]
    async fn test_apply_auth_sets_organization_header() {
        let provider = ApiKeyProvider::new("sk-test123456").with_organization("org-42");
        let mut headers = HeaderMap::new();

        provider.apply_auth(&mut headers).await.unwrap();
        assert_eq!(headers.get("OpenAI-Organization").unwrap(), "org-42");
    }
}
