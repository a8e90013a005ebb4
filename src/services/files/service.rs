use crate::auth::AuthProvider;
use crate::errors::{OpenAIError, OpenAIResult};
use crate::services::files::validation::{validate_file_id, validate_upload_request};
use crate::services::files::{FileDeleteResponse, FileListResponse, FileObject, FileStatus, FileUploadRequest};
use crate::transport::{HttpTransport, ResponseParser};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

#[async_trait]
pub trait FileService: Send + Sync {
    async fn upload(&self, request: FileUploadRequest) -> OpenAIResult<FileObject>;
    async fn list(&self) -> OpenAIResult<FileListResponse>;
    async fn retrieve(&self, file_id: &str) -> OpenAIResult<FileObject>;
    async fn delete(&self, file_id: &str) -> OpenAIResult<FileDeleteResponse>;
    async fn content(&self, file_id: &str) -> OpenAIResult<Bytes>;
}

pub struct FilesClient {
    transport: Arc<dyn HttpTransport>,
    auth: Arc<dyn AuthProvider>,
}

impl FilesClient {
    pub fn new(transport: Arc<dyn HttpTransport>, auth: Arc<dyn AuthProvider>) -> Self {
        Self { transport, auth }
    }

    async fn auth_headers(&self) -> OpenAIResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        self.auth.apply_auth(&mut headers).await?;
        Ok(headers)
    }

    /// Polls `retrieve` at a fixed interval until the file reaches a
    /// terminal state: `processed` succeeds, `error` fails. Any other
    /// status keeps polling; there is no upper bound on wait time.
    pub async fn wait_until_processed(
        &self,
        file_id: &str,
        poll_interval: Duration,
    ) -> OpenAIResult<FileObject> {
        let mut last_status: Option<FileStatus> = None;

        loop {
            let file = self.retrieve(file_id).await?;
            let status = file.status.unwrap_or(FileStatus::Unknown);

            if last_status != Some(status) {
                info!(file_id, %status, "file status");
                last_status = Some(status);
            } else {
                debug!(file_id, %status, "polling file status");
            }

            match status {
                FileStatus::Processed => return Ok(file),
                FileStatus::Error => {
                    return Err(OpenAIError::FileProcessing {
                        file_id: file_id.to_string(),
                        details: file
                            .status_details
                            .unwrap_or_else(|| "remote processing reported an error".to_string()),
                    });
                }
                _ => {}
            }

            tokio::time::sleep(poll_interval).await;
        }
    }
}

#[async_trait]
impl FileService for FilesClient {
    async fn upload(&self, request: FileUploadRequest) -> OpenAIResult<FileObject> {
        validate_upload_request(&request)?;
        let headers = self.auth_headers().await?;

        let value = self
            .transport
            .upload_file(
                "/files",
                request.file,
                &request.filename,
                &request.purpose,
                headers,
            )
            .await?;
        ResponseParser::decode(value)
    }

    async fn list(&self) -> OpenAIResult<FileListResponse> {
        let headers = self.auth_headers().await?;

        let value = self
            .transport
            .request(Method::GET, "/files", None, headers)
            .await?;
        ResponseParser::decode(value)
    }

    async fn retrieve(&self, file_id: &str) -> OpenAIResult<FileObject> {
        validate_file_id(file_id)?;
        let headers = self.auth_headers().await?;

        let path = format!("/files/{}", file_id);
        let value = self
            .transport
            .request(Method::GET, &path, None, headers)
            .await?;
        ResponseParser::decode(value)
    }

    async fn delete(&self, file_id: &str) -> OpenAIResult<FileDeleteResponse> {
        validate_file_id(file_id)?;
        let headers = self.auth_headers().await?;

        let path = format!("/files/{}", file_id);
        let value = self
            .transport
            .request(Method::DELETE, &path, None, headers)
            .await?;
        ResponseParser::decode(value)
    }

    async fn content(&self, file_id: &str) -> OpenAIResult<Bytes> {
        validate_file_id(file_id)?;
        let headers = self.auth_headers().await?;

        let path = format!("/files/{}/content", file_id);
        self.transport.download_file(&path, headers).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FilesClient>();
    }
}
