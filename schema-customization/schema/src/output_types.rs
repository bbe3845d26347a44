use crate::{ArgumentMap, FieldMap, FieldResolver, InputValue, TypeRef};

/// Suffix of node keys holding the id of a separately stored node.
pub const NODE_REFERENCE_SUFFIX: &str = "___NODE";

#[derive(Debug, Clone, PartialEq)]
pub struct OutputField {
    pub field_type: TypeRef,
    pub args: ArgumentMap,
    pub extensions: FieldExtensions,
    /// Runs at query time. `None` reads the value stored under the field key.
    pub resolver: Option<FieldResolver>,
    pub description: Option<String>,
}

impl OutputField {
    pub fn new(field_type: impl Into<TypeRef>) -> Self {
        OutputField {
            field_type: field_type.into(),
            args: ArgumentMap::new(),
            extensions: FieldExtensions::default(),
            resolver: None,
            description: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.field_type = self.field_type.required();
        self
    }

    pub fn linked(mut self, link: LinkExtension) -> Self {
        self.extensions.link = Some(link);
        self
    }

    pub fn resolved_by(mut self, resolver: FieldResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn with_arg(mut self, name: impl Into<String>, arg: InputValue) -> Self {
        self.args.insert(name.into(), arg);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn link(&self) -> Option<&LinkExtension> {
        self.extensions.link.as_ref()
    }
}

/// Directives the host applies to a field when resolving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldExtensions {
    pub link: Option<LinkExtension>,
    pub dateformat: Option<DateFormatExtension>,
}

impl FieldExtensions {
    pub fn is_empty(&self) -> bool {
        self.link.is_none() && self.dateformat.is_none()
    }
}

/// Resolves the field to the node whose `by` key equals the value stored under `from`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkExtension {
    pub by: String,
    pub from: String,
}

impl LinkExtension {
    pub fn by_id(from: impl Into<String>) -> Self {
        LinkExtension {
            by: "id".to_owned(),
            from: from.into(),
        }
    }

    /// Link through the `<field_key>___NODE` key the node creator writes references to.
    pub fn node_reference(field_key: &str) -> Self {
        LinkExtension::by_id(format!("{field_key}{NODE_REFERENCE_SUFFIX}"))
    }
}

/// Date formatting slot. Empty by default; consumers fill it in through query arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateFormatExtension {
    pub format_string: Option<String>,
    pub from_now: Option<bool>,
    pub difference: Option<String>,
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeExtensions {
    /// Whether the host may add fields it infers from stored data.
    pub infer: bool,
}

impl Default for TypeExtensions {
    fn default() -> Self {
        TypeExtensions { infer: true }
    }
}

/// An object type, or the shape of an interface.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectTypeDefinition {
    pub name: String,
    pub description: Option<String>,
    pub fields: FieldMap,
    pub interfaces: Vec<String>,
    pub extensions: TypeExtensions,
}

pub type InterfaceTypeDefinition = ObjectTypeDefinition;

impl ObjectTypeDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        ObjectTypeDefinition {
            name: name.into(),
            description: None,
            fields: FieldMap::new(),
            interfaces: Vec::new(),
            extensions: TypeExtensions::default(),
        }
    }

    pub fn field(mut self, name: impl Into<String>, field: OutputField) -> Self {
        self.fields.insert(name.into(), field);
        self
    }

    /// Appends `fields` after the existing ones. Existing keys keep their position and definition.
    pub fn extend_fields(mut self, fields: FieldMap) -> Self {
        for (name, field) in fields {
            self.fields.entry(name).or_insert(field);
        }

        self
    }

    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        let interface = interface.into();

        if !self.interfaces.contains(&interface) {
            self.interfaces.push(interface);
        }

        self
    }

    pub fn dont_infer(mut self) -> Self {
        self.extensions.infer = false;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn find_field(&self, name: &str) -> Option<&OutputField> {
        self.fields.get(name)
    }

    pub fn implements_interface(&self, name: &str) -> bool {
        self.interfaces.iter().any(|interface| interface == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScalarType;

    #[test]
    fn node_references_use_the_node_suffix() {
        let link = LinkExtension::node_reference("author");

        assert_eq!(link.by, "id");
        assert_eq!(link.from, "author___NODE");
    }

    #[test]
    fn extended_fields_never_replace_existing_ones() {
        let mut extra = FieldMap::new();
        extra.insert("id".to_owned(), OutputField::new(ScalarType::String));
        extra.insert("title".to_owned(), OutputField::new(ScalarType::String));

        let object = ObjectTypeDefinition::new("ContentfulPost")
            .field("id", OutputField::new(ScalarType::Id).required())
            .extend_fields(extra);

        let names: Vec<&str> = object.fields.keys().map(String::as_str).collect();
        assert_eq!(names, ["id", "title"]);
        assert_eq!(object.find_field("id").unwrap().field_type.to_string(), "ID!");
    }

    #[test]
    fn interfaces_are_declared_once() {
        let object = ObjectTypeDefinition::new("ContentfulTag")
            .implements("Node")
            .implements("Node");

        assert_eq!(object.interfaces, ["Node"]);
        assert!(object.implements_interface("Node"));
        assert!(object.extensions.infer);
        assert!(!object.dont_infer().extensions.infer);
    }
}
