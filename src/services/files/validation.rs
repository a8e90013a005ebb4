use crate::errors::{OpenAIError, OpenAIResult, ValidationError};
use crate::services::files::FileUploadRequest;

pub fn validate_upload_request(request: &FileUploadRequest) -> OpenAIResult<()> {
    if request.filename.is_empty() {
        return Err(OpenAIError::Validation(
            ValidationError::MissingRequiredField("filename".to_string()),
        ));
    }

    if request.file.is_empty() {
        return Err(OpenAIError::Validation(ValidationError::InvalidParameter {
            parameter: "file".to_string(),
            reason: "file cannot be empty".to_string(),
        }));
    }

    if request.purpose.is_empty() {
        return Err(OpenAIError::Validation(
            ValidationError::MissingRequiredField("purpose".to_string()),
        ));
    }

    Ok(())
}

pub fn validate_file_id(file_id: &str) -> OpenAIResult<()> {
    if file_id.is_empty() {
        return Err(OpenAIError::Validation(
            ValidationError::MissingRequiredField("file_id".to_string()),
        ));
    }
    Ok(())
}
