use crate::errors::{OpenAIError, OpenAIResult, SchemaError, ValidationError};
use crate::schema::json::remove_key;
use crate::services::chat::ChatCompletionResponse;
use schemars::gen::SchemaGenerator;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// JSON-serializable description of a callable or data model, in the shape
/// the chat API's `functions` parameter expects. Derived once from a typed
/// definition and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionSchema {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub parameters: Value,
}

/// Derives the parameter schema for `T`, scrubbed of the generator metadata
/// the remote API does not expect. The `required` list is the sorted set of
/// property names; optional/required tracking is deliberately not attempted.
pub(crate) fn parameters_for<T: JsonSchema>() -> Value {
    let root = SchemaGenerator::default().into_root_schema_for::<T>();
    let mut parameters =
        serde_json::to_value(root).unwrap_or_else(|_| json!({ "type": "object" }));

    if let Some(obj) = parameters.as_object_mut() {
        obj.remove("description");
    }
    remove_key(&mut parameters, "$schema");
    remove_key(&mut parameters, "title");
    remove_key(&mut parameters, "additionalProperties");

    let required = parameters
        .get("properties")
        .and_then(Value::as_object)
        .map(|properties| {
            let mut names: Vec<&String> = properties.keys().collect();
            names.sort();
            json!(names)
        });
    if let (Some(required), Some(obj)) = (required, parameters.as_object_mut()) {
        obj.insert("required".to_string(), required);
    }

    parameters
}

/// Schema-description step for a typed data model: the schema title becomes
/// the function name and the model's doc comment its description.
pub fn schema_for_model<T: JsonSchema>() -> FunctionSchema {
    let root = SchemaGenerator::default().into_root_schema_for::<T>();
    let description = root
        .schema
        .metadata
        .as_ref()
        .and_then(|metadata| metadata.description.clone());

    FunctionSchema {
        name: T::schema_name(),
        description,
        parameters: parameters_for::<T>(),
    }
}

/// Schema-description step for a typed callable: the caller supplies the
/// name and description, the argument type supplies the parameter schema.
pub fn describe_function<A: JsonSchema>(
    name: impl Into<String>,
    description: Option<&str>,
) -> FunctionSchema {
    FunctionSchema {
        name: name.into(),
        description: description.map(str::to_owned),
        parameters: parameters_for::<A>(),
    }
}

/// Validation step: checks a JSON-encoded arguments string against the
/// declared argument type.
pub fn validate_arguments<A: DeserializeOwned>(arguments: &str) -> OpenAIResult<A> {
    serde_json::from_str(arguments)
        .map_err(|e| OpenAIError::Validation(ValidationError::ArgumentMismatch(e.to_string())))
}

/// Pulls the function-call arguments out of the first choice. `strict`
/// additionally asserts the call's name matches the schema's.
fn extract_arguments<'a>(
    schema: &FunctionSchema,
    completion: &'a ChatCompletionResponse,
    strict: bool,
) -> OpenAIResult<&'a str> {
    let choice = completion
        .choices
        .first()
        .ok_or(SchemaError::EmptyChoices)?;
    let call = choice
        .message
        .function_call
        .as_ref()
        .ok_or(SchemaError::MissingFunctionCall)?;

    if strict && call.name != schema.name {
        return Err(OpenAIError::Schema(SchemaError::FunctionNameMismatch {
            expected: schema.name.clone(),
            actual: call.name.clone(),
        }));
    }

    Ok(&call.arguments)
}

/// Reverse path: parses a completion's function-call payload into a
/// validated instance of `T`.
pub fn parse_from_response<T: DeserializeOwned>(
    schema: &FunctionSchema,
    completion: &ChatCompletionResponse,
    strict: bool,
) -> OpenAIResult<T> {
    let arguments = extract_arguments(schema, completion, strict)?;
    validate_arguments(arguments)
}

/// Sugar for data-model types: any `JsonSchema + DeserializeOwned` type
/// carries its own function schema and response parser.
pub trait StructuredOutput: JsonSchema + DeserializeOwned + Sized {
    fn function_schema() -> FunctionSchema {
        schema_for_model::<Self>()
    }

    fn from_response(completion: &ChatCompletionResponse, strict: bool) -> OpenAIResult<Self> {
        parse_from_response(&Self::function_schema(), completion, strict)
    }
}

impl<T: JsonSchema + DeserializeOwned> StructuredOutput for T {}

/// A typed callable paired with its derived schema: the explicit
/// describe-then-validate composition. Calling through `invoke_json` or
/// `from_response` validates arguments before the handler runs.
pub struct TypedFunction<A, R> {
    schema: FunctionSchema,
    handler: Box<dyn Fn(A) -> R + Send + Sync>,
}

impl<A, R> TypedFunction<A, R>
where
    A: JsonSchema + DeserializeOwned,
{
    pub fn new<F>(name: impl Into<String>, description: &str, handler: F) -> Self
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        Self {
            schema: describe_function::<A>(name, Some(description)),
            handler: Box::new(handler),
        }
    }

    pub fn schema(&self) -> &FunctionSchema {
        &self.schema
    }

    /// Invokes the handler directly with already-typed arguments.
    pub fn call(&self, args: A) -> R {
        (self.handler)(args)
    }

    /// Validates a JSON-encoded arguments string, then invokes the handler.
    pub fn invoke_json(&self, arguments: &str) -> OpenAIResult<R> {
        let args = validate_arguments::<A>(arguments)?;
        Ok((self.handler)(args))
    }

    /// Full reverse path: extracts the completion's function call and
    /// invokes the handler with its validated arguments.
    pub fn from_response(
        &self,
        completion: &ChatCompletionResponse,
        strict: bool,
    ) -> OpenAIResult<R> {
        let arguments = extract_arguments(&self.schema, completion, strict)?;
        self.invoke_json(arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::chat::{ChatCompletionChoice, ChatMessage, ChatMessageRole, FunctionCall};
    use pretty_assertions::assert_eq;

    /// Look up the current weather for a location.
    #[derive(Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
    struct Weather {
        location: String,
        unit: String,
    }

    fn completion_with_call(name: &str, arguments: &str) -> ChatCompletionResponse {
        ChatCompletionResponse {
            id: "chatcmpl-1".to_string(),
            created: 1700000000,
            model: "gpt-4".to_string(),
            choices: vec![ChatCompletionChoice {
                index: 0,
                message: ChatMessage {
                    role: ChatMessageRole::Assistant,
                    content: None,
                    name: None,
                    function_call: Some(FunctionCall {
                        name: name.to_string(),
                        arguments: arguments.to_string(),
                    }),
                },
                finish_reason: Some("function_call".to_string()),
            }],
            usage: None,
        }
    }

    #[test]
    fn test_schema_name_and_description_from_model() {
        let schema = Weather::function_schema();
        assert_eq!(schema.name, "Weather");
        assert_eq!(
            schema.description.as_deref(),
            Some("Look up the current weather for a location.")
        );
    }

    #[test]
    fn test_required_is_sorted_property_names() {
        let schema = Weather::function_schema();
        assert_eq!(
            schema.parameters["required"],
            serde_json::json!(["location", "unit"])
        );
    }

    #[test]
    fn test_parameters_are_scrubbed() {
        let schema = Weather::function_schema();
        let rendered = serde_json::to_string(&schema.parameters).unwrap();
        assert!(!rendered.contains("\"title\""));
        assert!(!rendered.contains("additionalProperties"));
        assert!(!rendered.contains("$schema"));
    }

    #[test]
    fn test_strict_parse_rejects_mismatched_name() {
        let completion =
            completion_with_call("Forecast", r#"{"location": "Oslo", "unit": "celsius"}"#);
        let result = Weather::from_response(&completion, true);
        assert!(matches!(
            result,
            Err(OpenAIError::Schema(SchemaError::FunctionNameMismatch { .. }))
        ));
    }

    #[test]
    fn test_non_strict_parse_skips_name_check() {
        let completion =
            completion_with_call("Forecast", r#"{"location": "Oslo", "unit": "celsius"}"#);
        let parsed = Weather::from_response(&completion, false).unwrap();
        assert_eq!(
            parsed,
            Weather {
                location: "Oslo".to_string(),
                unit: "celsius".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_equals_direct_construction() {
        let completion =
            completion_with_call("Weather", r#"{"location": "Oslo", "unit": "celsius"}"#);
        let parsed = Weather::from_response(&completion, true).unwrap();
        assert_eq!(
            parsed,
            Weather {
                location: "Oslo".to_string(),
                unit: "celsius".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_function_call_is_reported() {
        let mut completion = completion_with_call("Weather", "{}");
        completion.choices[0].message.function_call = None;

        let result = Weather::from_response(&completion, true);
        assert!(matches!(
            result,
            Err(OpenAIError::Schema(SchemaError::MissingFunctionCall))
        ));
    }

    #[test]
    fn test_validate_arguments_rejects_type_mismatch() {
        let result = validate_arguments::<Weather>(r#"{"location": 42, "unit": "celsius"}"#);
        assert!(matches!(result, Err(OpenAIError::Validation(_))));
    }

    #[test]
    fn test_typed_function_validates_then_invokes() {
        let function = TypedFunction::new(
            "weather",
            "Look up the current weather for a location.",
            |args: Weather| format!("{} in {}", args.unit, args.location),
        );

        assert_eq!(function.schema().name, "weather");
        assert_eq!(
            function.schema().parameters["required"],
            serde_json::json!(["location", "unit"])
        );

        let result = function
            .invoke_json(r#"{"location": "Oslo", "unit": "celsius"}"#)
            .unwrap();
        assert_eq!(result, "celsius in Oslo");

        assert!(function.invoke_json(r#"{"location": "Oslo"}"#).is_err());
    }

    #[test]
    fn test_typed_function_from_response() {
        let function = TypedFunction::new("weather", "Weather lookup.", |args: Weather| {
            args.location
        });

        let completion =
            completion_with_call("weather", r#"{"location": "Oslo", "unit": "celsius"}"#);
        assert_eq!(function.from_response(&completion, true).unwrap(), "Oslo");

        let wrong_name =
            completion_with_call("forecast", r#"{"location": "Oslo", "unit": "celsius"}"#);
        assert!(function.from_response(&wrong_name, true).is_err());
    }
}
