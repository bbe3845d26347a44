use indexmap::IndexMap;

#[derive(Debug, Clone, PartialEq)]
pub struct EnumTypeDefinition {
    pub name: String,
    pub description: Option<String>,
    pub values: IndexMap<String, EnumValue>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnumValue {
    pub description: Option<String>,
}

impl EnumTypeDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        EnumTypeDefinition {
            name: name.into(),
            description: None,
            values: IndexMap::new(),
        }
    }

    pub fn value(mut self, name: impl Into<String>) -> Self {
        self.values.insert(name.into(), EnumValue::default());
        self
    }

    pub fn described_value(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        let value = EnumValue {
            description: Some(description.into()),
        };

        self.values.insert(name.into(), value);
        self
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains_key(value)
    }
}
