use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentModelError {
    #[error("Invalid content model: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Expected a list of content types, found {found}")]
    UnexpectedPayload { found: &'static str },

    #[error("Content type collection has no `items` list")]
    MissingItems,
}

impl ContentModelError {
    pub(crate) fn unexpected(value: &Value) -> Self {
        let found = match value {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "a list",
            Value::Object(_) => "an object",
        };

        ContentModelError::UnexpectedPayload { found }
    }
}
