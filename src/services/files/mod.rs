mod service;
mod types;
mod validation;

pub use service::{FileService, FilesClient};
pub use types::{
    newest_first, FileDeleteResponse, FileListResponse, FileObject, FileStatus, FileUploadRequest,
};
pub use validation::{validate_file_id, validate_upload_request};
