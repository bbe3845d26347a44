use serde::Deserialize;
use std::fmt;

/// The type of a Contentful field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum FieldType {
    Symbol,
    Text,
    Integer,
    Number,
    Date,
    Object,
    Boolean,
    Location,
    RichText,
    Array,
    Link,
}

impl FieldType {
    /// Field types that map to a single schema type on their own.
    /// `Array` and `Link` need more of the field definition to resolve.
    pub const fn primitive(self) -> Option<PrimitiveType> {
        match self {
            FieldType::Symbol => Some(PrimitiveType::Symbol),
            FieldType::Text => Some(PrimitiveType::Text),
            FieldType::Integer => Some(PrimitiveType::Integer),
            FieldType::Number => Some(PrimitiveType::Number),
            FieldType::Date => Some(PrimitiveType::Date),
            FieldType::Object => Some(PrimitiveType::Object),
            FieldType::Boolean => Some(PrimitiveType::Boolean),
            FieldType::Location => Some(PrimitiveType::Location),
            FieldType::RichText => Some(PrimitiveType::RichText),
            FieldType::Array | FieldType::Link => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Symbol,
    Text,
    Integer,
    Number,
    Date,
    Object,
    Boolean,
    Location,
    RichText,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 9] = [
        PrimitiveType::Symbol,
        PrimitiveType::Text,
        PrimitiveType::Integer,
        PrimitiveType::Number,
        PrimitiveType::Date,
        PrimitiveType::Object,
        PrimitiveType::Boolean,
        PrimitiveType::Location,
        PrimitiveType::RichText,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            PrimitiveType::Symbol => "Symbol",
            PrimitiveType::Text => "Text",
            PrimitiveType::Integer => "Integer",
            PrimitiveType::Number => "Number",
            PrimitiveType::Date => "Date",
            PrimitiveType::Object => "Object",
            PrimitiveType::Boolean => "Boolean",
            PrimitiveType::Location => "Location",
            PrimitiveType::RichText => "RichText",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The category of entity a link field points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum LinkType {
    Asset,
    Entry,
}

impl LinkType {
    pub const fn as_str(self) -> &'static str {
        match self {
            LinkType::Asset => "Asset",
            LinkType::Entry => "Entry",
        }
    }
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field of a content type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub omitted: bool,
    /// Element definition, present on `Array` fields.
    #[serde(default)]
    pub items: Option<FieldItems>,
    /// Target category, present on `Link` fields.
    #[serde(default)]
    pub link_type: Option<LinkType>,
}

/// Element definition of an `Array` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldItems {
    #[serde(rename = "type")]
    pub item_type: FieldType,
    #[serde(default)]
    pub link_type: Option<LinkType>,
}

impl FieldDefinition {
    pub fn new(id: impl Into<String>, field_type: FieldType) -> Self {
        FieldDefinition {
            id: id.into(),
            name: String::new(),
            field_type,
            required: false,
            disabled: false,
            omitted: false,
            items: None,
            link_type: None,
        }
    }

    pub fn link(id: impl Into<String>, link_type: LinkType) -> Self {
        let mut field = FieldDefinition::new(id, FieldType::Link);
        field.link_type = Some(link_type);
        field
    }

    pub fn array(id: impl Into<String>, items: FieldItems) -> Self {
        let mut field = FieldDefinition::new(id, FieldType::Array);
        field.items = Some(items);
        field
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn omitted(mut self) -> Self {
        self.omitted = true;
        self
    }

    /// Whether the field takes part in the schema at all.
    pub fn is_active(&self) -> bool {
        !(self.disabled || self.omitted)
    }
}

impl FieldItems {
    pub fn new(item_type: FieldType) -> Self {
        FieldItems {
            item_type,
            link_type: None,
        }
    }

    pub fn link(link_type: LinkType) -> Self {
        FieldItems {
            item_type: FieldType::Link,
            link_type: Some(link_type),
        }
    }
}
