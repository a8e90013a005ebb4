mod service;
mod types;

pub use service::{ChatClient, ChatService};
pub use types::{
    ChatCompletionChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage,
    ChatMessageRole, FunctionCall, Usage,
};
