use crate::constants::fields;
use schema::{
    LinkExtension, NODE_INTERFACE, ObjectTypeDefinition, OutputField, ScalarType, SharedType, TypeDefinition, TypeRef,
};

fn required(field_type: impl Into<TypeRef>) -> OutputField {
    OutputField::new(field_type).required()
}

/// `id: ID!`, `sys: ContentfulSys!`, common to everything stored from Contentful.
fn reference_fields(object: ObjectTypeDefinition) -> ObjectTypeDefinition {
    object
        .field(fields::ID, required(ScalarType::Id))
        .field(fields::SYS, required(SharedType::Sys))
}

pub(crate) fn reference_interface() -> TypeDefinition {
    let interface = reference_fields(ObjectTypeDefinition::new(SharedType::Reference.name()));
    TypeDefinition::Interface(interface)
}

pub(crate) fn content_type_object() -> TypeDefinition {
    let object = ObjectTypeDefinition::new(SharedType::ContentType.name())
        .field(fields::ID, required(ScalarType::Id))
        .field("name", required(ScalarType::String))
        .field("displayField", required(ScalarType::String))
        .field("description", required(ScalarType::String))
        .implements(NODE_INTERFACE);

    TypeDefinition::Object(object)
}

pub(crate) fn sys_object() -> TypeDefinition {
    let content_type =
        OutputField::new(SharedType::ContentType).linked(LinkExtension::node_reference(fields::CONTENT_TYPE));

    let object = ObjectTypeDefinition::new(SharedType::Sys.name())
        .field("type", required(ScalarType::String))
        .field(fields::ID, required(ScalarType::String))
        .field("spaceId", required(ScalarType::String))
        .field("environmentId", required(ScalarType::String))
        .field(fields::CONTENT_TYPE, content_type)
        .field("firstPublishedAt", required(ScalarType::Date))
        .field("publishedAt", required(ScalarType::Date))
        .field("publishedVersion", required(ScalarType::Int))
        .field("locale", required(ScalarType::String))
        .dont_infer();

    TypeDefinition::Object(object)
}

pub(crate) fn entry_interface() -> TypeDefinition {
    let interface = reference_fields(ObjectTypeDefinition::new(SharedType::Entry.name()))
        .field(fields::METADATA, required(SharedType::Metadata))
        .implements(SharedType::Reference.name())
        .implements(NODE_INTERFACE)
        .dont_infer();

    TypeDefinition::Interface(interface)
}

pub(crate) fn metadata_object() -> TypeDefinition {
    let tags = OutputField::new(TypeRef::from(SharedType::Tag).list().required())
        .linked(LinkExtension::node_reference(fields::TAGS));

    let object = ObjectTypeDefinition::new(SharedType::Metadata.name())
        .field(fields::TAGS, tags)
        .dont_infer();

    TypeDefinition::Object(object)
}

pub(crate) fn tag_object() -> TypeDefinition {
    let object = ObjectTypeDefinition::new(SharedType::Tag.name())
        .field("name", required(ScalarType::String))
        .field(fields::CONTENTFUL_ID, required(ScalarType::String))
        .field(fields::ID, required(ScalarType::Id))
        .implements(NODE_INTERFACE)
        .dont_infer();

    TypeDefinition::Object(object)
}

pub(crate) fn location_object() -> TypeDefinition {
    let object = ObjectTypeDefinition::new(SharedType::Location.name())
        .field("lat", required(ScalarType::Float))
        .field("lon", required(ScalarType::Float))
        .dont_infer();

    TypeDefinition::Object(object)
}

/// Long text fields live in nodes of their own. The host adds `id`.
pub(crate) fn text_object() -> TypeDefinition {
    let object = ObjectTypeDefinition::new(SharedType::Text.name())
        .field("raw", required(ScalarType::String))
        .implements(NODE_INTERFACE)
        .dont_infer();

    TypeDefinition::Object(object)
}

/// Fields every content type object starts with.
pub(crate) fn entry_fields(object: ObjectTypeDefinition) -> ObjectTypeDefinition {
    reference_fields(object).field(fields::METADATA, required(SharedType::Metadata))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_types(definition: &TypeDefinition) -> Vec<String> {
        let object = definition
            .as_object()
            .or_else(|| definition.as_interface())
            .unwrap();

        object
            .fields
            .iter()
            .map(|(name, field)| format!("{name}: {}", field.field_type))
            .collect()
    }

    #[test]
    fn only_the_reference_and_content_type_allow_inference() {
        let definitions = [
            reference_interface(),
            content_type_object(),
            sys_object(),
            entry_interface(),
            metadata_object(),
            tag_object(),
            location_object(),
            text_object(),
        ];

        let inferring: Vec<&str> = definitions
            .iter()
            .filter(|definition| definition.infers_fields())
            .map(TypeDefinition::name)
            .collect();

        assert_eq!(inferring, ["ContentfulReference", "ContentfulContentType"]);
    }

    #[test]
    fn entry_extends_the_reference() {
        let entry = entry_interface();
        let interface = entry.as_interface().unwrap();

        assert_eq!(
            field_types(&entry),
            ["id: ID!", "sys: ContentfulSys!", "metadata: ContentfulMetadata!"]
        );
        assert_eq!(interface.interfaces, ["ContentfulReference", "Node"]);
    }

    #[test]
    fn sys_links_its_content_type_node() {
        let sys = sys_object();
        let content_type = sys.as_object().unwrap().find_field("contentType").unwrap();

        assert_eq!(content_type.field_type.to_string(), "ContentfulContentType");
        assert_eq!(content_type.link(), Some(&LinkExtension::by_id("contentType___NODE")));
    }

    #[test]
    fn metadata_tags_are_a_required_list() {
        let metadata = metadata_object();
        let tags = metadata.as_object().unwrap().find_field("tags").unwrap();

        assert_eq!(tags.field_type.to_string(), "[ContentfulTag]!");
        assert_eq!(tags.link(), Some(&LinkExtension::by_id("tags___NODE")));
    }

    #[test]
    fn text_nodes_only_declare_raw() {
        assert_eq!(field_types(&text_object()), ["raw: String!"]);
    }
}
