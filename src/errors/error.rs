use crate::errors::categories::{
    AuthenticationError, ConfigurationError, NetworkError, SchemaError, ServerError,
    ValidationError,
};
use thiserror::Error;

pub type OpenAIResult<T> = Result<T, OpenAIError>;

#[derive(Error, Debug)]
pub enum OpenAIError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Authentication error: {0}")]
    Authentication(#[from] AuthenticationError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Server error: {0}")]
    Server(#[from] ServerError),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Request error: {status_code} - {message}")]
    Request {
        status_code: u16,
        message: String,
        error_type: Option<String>,
        error_code: Option<String>,
    },

    #[error("File {file_id} failed remote processing: {details}")]
    FileProcessing { file_id: String, details: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl OpenAIError {
    pub fn is_authentication_error(&self) -> bool {
        matches!(self, OpenAIError::Authentication(_))
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            OpenAIError::Request { status_code, .. } => Some(*status_code),
            OpenAIError::Authentication(_) => Some(401),
            OpenAIError::Server(ServerError::InternalError(_)) => Some(500),
            OpenAIError::Server(ServerError::BadGateway(_)) => Some(502),
            OpenAIError::Server(ServerError::ServiceUnavailable(_)) => Some(503),
            OpenAIError::Server(ServerError::GatewayTimeout(_)) => Some(504),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for OpenAIError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            OpenAIError::Network(NetworkError::ConnectionFailed(err.to_string()))
        } else {
            OpenAIError::Network(NetworkError::RequestFailed(err.to_string()))
        }
    }
}

impl From<serde_json::Error> for OpenAIError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            OpenAIError::Deserialization(err.to_string())
        } else {
            OpenAIError::Serialization(err.to_string())
        }
    }
}

impl From<url::ParseError> for OpenAIError {
    fn from(err: url::ParseError) -> Self {
        OpenAIError::Configuration(ConfigurationError::InvalidBaseUrl(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_code() {
        let request_error = OpenAIError::Request {
            status_code: 404,
            message: "Not found".to_string(),
            error_type: None,
            error_code: None,
        };
        assert_eq!(request_error.status_code(), Some(404));

        let server_error = OpenAIError::Server(ServerError::ServiceUnavailable("down".into()));
        assert_eq!(server_error.status_code(), Some(503));
    }

    #[test]
    fn test_is_authentication_error() {
        let auth = OpenAIError::Authentication(AuthenticationError::Unauthorized("nope".into()));
        assert!(auth.is_authentication_error());

        let schema = OpenAIError::Schema(SchemaError::MissingFunctionCall);
        assert!(!schema.is_authentication_error());
    }
}
