use crate::TypeRef;
use serde_json::Value;

/// A field argument.
#[derive(Debug, Clone, PartialEq)]
pub struct InputValue {
    pub value_type: TypeRef,
    pub default_value: Option<Value>,
    pub description: Option<String>,
}

impl InputValue {
    pub fn new(value_type: impl Into<TypeRef>) -> Self {
        InputValue {
            value_type: value_type.into(),
            default_value: None,
            description: None,
        }
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Field arguments, in declaration order.
pub type ArgumentMap = indexmap::IndexMap<String, InputValue>;
