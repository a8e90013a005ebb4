use crate::schema::function::{parameters_for, FunctionSchema};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Ordered sequence of instances of a base schema type, letting the model
/// return several structured results in one response. An absent list parses
/// as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct MultiTask<T> {
    #[serde(default)]
    pub tasks: Vec<T>,
}

impl<T> Default for MultiTask<T> {
    fn default() -> Self {
        Self { tasks: Vec::new() }
    }
}

/// Builds the function schema for `MultiTask<T>`. The schema's identity is a
/// deterministic function of the base schema name unless overridden: `name`
/// replaces the base-name portion (the `Multi` prefix always applies) and
/// `description` replaces the whole description.
pub fn multi_task_schema<T: JsonSchema>(
    name: Option<&str>,
    description: Option<&str>,
) -> FunctionSchema {
    let task_name = name.map(str::to_owned).unwrap_or_else(T::schema_name);

    let mut parameters = parameters_for::<MultiTask<T>>();
    if let Some(tasks) = parameters
        .get_mut("properties")
        .and_then(|properties| properties.get_mut("tasks"))
        .and_then(Value::as_object_mut)
    {
        tasks.insert(
            "description".to_string(),
            json!(format!(
                "Correctly segmented list of '{task_name}' tasks"
            )),
        );
    }

    FunctionSchema {
        name: format!("Multi{task_name}"),
        description: Some(description.map(str::to_owned).unwrap_or_else(|| {
            format!("Correct segmentation of '{task_name}' tasks")
        })),
        parameters,
    }
}
