pub mod auth;
pub mod cli;
pub mod client;
pub mod errors;
pub mod schema;
pub mod services;
pub mod transport;

pub use client::{OpenAIClient, OpenAIConfig};
pub use errors::{OpenAIError, OpenAIResult};

pub use schema::{
    describe_function, multi_task_schema, parse_from_response, remove_key, schema_for_model,
    validate_arguments, FunctionSchema, MultiTask, StructuredOutput, TypedFunction,
};

pub use services::{
    chat::{ChatClient, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChatService},
    files::{
        FileDeleteResponse, FileListResponse, FileObject, FileService, FileStatus,
        FileUploadRequest, FilesClient,
    },
};

pub mod prelude {
    pub use crate::client::{OpenAIClient, OpenAIConfig};
    pub use crate::errors::{OpenAIError, OpenAIResult};
    pub use crate::schema::{FunctionSchema, MultiTask, StructuredOutput, TypedFunction};
    pub use crate::services::chat::{ChatCompletionRequest, ChatMessage, ChatService};
    pub use crate::services::files::{FileService, FileUploadRequest};
}
