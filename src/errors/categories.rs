use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ConfigurationError {
    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    #[error("Invalid API key format: {0}")]
    InvalidApiKeyFormat(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid timeout: {0}")]
    InvalidTimeout(String),
}

#[derive(Error, Debug, Clone)]
pub enum AuthenticationError {
    #[error("Invalid API key: {0}")]
    InvalidApiKey(String),

    #[error("Insufficient permissions: {0}")]
    InsufficientPermissions(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

#[derive(Error, Debug, Clone)]
pub enum ValidationError {
    #[error("Invalid parameter: {parameter} - {reason}")]
    InvalidParameter { parameter: String, reason: String },

    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Arguments do not match the declared parameter types: {0}")]
    ArgumentMismatch(String),
}

#[derive(Error, Debug, Clone)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

#[derive(Error, Debug, Clone)]
pub enum ServerError {
    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Bad gateway: {0}")]
    BadGateway(String),

    #[error("Gateway timeout: {0}")]
    GatewayTimeout(String),
}

/// Protocol-mismatch failures raised while parsing a chat completion back
/// into a typed value. Only `strict` parsing performs the name check.
#[derive(Error, Debug, Clone)]
pub enum SchemaError {
    #[error("Completion contains no choices")]
    EmptyChoices,

    #[error("No function call detected in completion message")]
    MissingFunctionCall,

    #[error("Function name does not match: expected `{expected}`, got `{actual}`")]
    FunctionNameMismatch { expected: String, actual: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let error = ValidationError::InvalidParameter {
            parameter: "purpose".to_string(),
            reason: "must not be empty".to_string(),
        };
        assert!(error.to_string().contains("purpose"));
    }

    #[test]
    fn test_schema_error_display() {
        let error = SchemaError::FunctionNameMismatch {
            expected: "Search".to_string(),
            actual: "Lookup".to_string(),
        };
        assert!(error.to_string().contains("Search"));
        assert!(error.to_string().contains("Lookup"));
    }
}
