use crate::schema::FunctionSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub functions: Option<Vec<FunctionSchema>>,

    /// Function-call selector: `"auto"`, `"none"`, or `{"name": ...}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_call: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatCompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            functions: None,
            function_call: None,
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn with_functions(mut self, functions: Vec<FunctionSchema>) -> Self {
        self.functions = Some(functions);
        self
    }

    /// Forces the model to call the named function.
    pub fn with_forced_function(mut self, name: impl Into<String>) -> Self {
        self.function_call = Some(serde_json::json!({ "name": name.into() }));
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatMessageRole,
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_call: Option<FunctionCall>,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatMessageRole::System,
            content: Some(content.into()),
            name: None,
            function_call: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatMessageRole::User,
            content: Some(content.into()),
            name: None,
            function_call: None,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatMessageRole::Assistant,
            content: Some(content.into()),
            name: None,
            function_call: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMessageRole {
    System,
    User,
    Assistant,
    Function,
}

/// Function-call payload attached to an assistant message. `arguments` is a
/// JSON-encoded string, exactly as the API returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: String,
    pub created: i64,
    pub model: String,
    pub choices: Vec<ChatCompletionChoice>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionChoice {
    pub index: u32,
    pub message: ChatMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_without_empty_fields() {
        let request = ChatCompletionRequest::new("gpt-4", vec![ChatMessage::user("hi")]);
        let value = serde_json::to_value(&request).unwrap();

        assert!(value.get("functions").is_none());
        assert!(value.get("function_call").is_none());
        assert_eq!(value["messages"][0]["role"], "user");
    }

    #[test]
    fn test_forced_function_selector() {
        let request = ChatCompletionRequest::new("gpt-4", vec![ChatMessage::user("hi")])
            .with_forced_function("Search");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["function_call"]["name"], "Search");
    }

    #[test]
    fn test_response_deserializes_function_call() {
        let body = serde_json::json!({
            "id": "chatcmpl-1",
            "created": 1700000000,
            "model": "gpt-4",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": null,
                    "function_call": {"name": "Search", "arguments": "{\"query\": \"rust\"}"}
                },
                "finish_reason": "function_call"
            }]
        });

        let response: ChatCompletionResponse = serde_json::from_value(body).unwrap();
        let call = response.choices[0].message.function_call.as_ref().unwrap();
        assert_eq!(call.name, "Search");
    }
}
