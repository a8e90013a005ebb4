use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Remote file record. Owned by the service; the client only ever holds a
/// transient copy fetched per request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileObject {
    pub id: String,
    pub bytes: u64,
    pub created_at: i64,
    pub filename: String,
    pub purpose: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FileStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_details: Option<String>,
}

/// Remote processing state of an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Uploaded,
    Pending,
    Processed,
    Error,
    Deleting,
    Deleted,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FileStatus::Uploaded => "uploaded",
            FileStatus::Pending => "pending",
            FileStatus::Processed => "processed",
            FileStatus::Error => "error",
            FileStatus::Deleting => "deleting",
            FileStatus::Deleted => "deleted",
            FileStatus::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone)]
pub struct FileUploadRequest {
    pub file: Bytes,
    pub filename: String,
    pub purpose: String,
}

impl FileUploadRequest {
    pub fn new(file: Bytes, filename: impl Into<String>, purpose: impl Into<String>) -> Self {
        Self {
            file,
            filename: filename.into(),
            purpose: purpose.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileListResponse {
    pub data: Vec<FileObject>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileDeleteResponse {
    pub id: String,
    pub deleted: bool,
}

/// Sorts records newest-first by creation time and keeps at most `limit`.
pub fn newest_first(mut files: Vec<FileObject>, limit: usize) -> Vec<FileObject> {
    files.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    files.truncate(limit);
    files
}
