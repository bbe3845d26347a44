use crate::FieldDefinition;
use serde::Deserialize;

/// A content type of the space, with its ordered field definitions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentTypeItem {
    pub sys: ContentTypeSys,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_field: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentTypeSys {
    pub id: String,
}

impl ContentTypeItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        ContentTypeItem {
            sys: ContentTypeSys { id: id.into() },
            name: name.into(),
            display_field: None,
            description: None,
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    /// The stable identifier (`sys.id`).
    pub fn id(&self) -> &str {
        &self.sys.id
    }

    /// Human readable name, falling back to the identifier for unnamed content types.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() { &self.sys.id } else { &self.name }
    }

    /// The identifier the schema type name is derived from.
    pub fn type_identifier(&self, use_name_for_id: bool) -> &str {
        if use_name_for_id { &self.name } else { &self.sys.id }
    }

    /// Fields that are neither disabled nor omitted, in declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.iter().filter(|field| field.is_active())
    }
}
