//! Conversion between typed Rust definitions and the JSON-schema shape the
//! chat API's function-calling feature expects, plus the reverse path from a
//! completion back to validated typed values.

mod function;
mod json;
mod multi;

pub use function::{
    describe_function, parse_from_response, schema_for_model, validate_arguments, FunctionSchema,
    StructuredOutput, TypedFunction,
};
pub use json::remove_key;
pub use multi::{multi_task_schema, MultiTask};
