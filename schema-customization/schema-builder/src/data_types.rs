use crate::FieldDescriptor;
use content_model::PrimitiveType;
use schema::{LinkExtension, ScalarType, SharedType};
use std::collections::HashMap;

/// Produces the descriptor of a primitive field from its key.
pub type TypeMapper = fn(&str) -> FieldDescriptor;

/// Registry from primitive Contentful field types to schema field descriptors.
#[derive(Debug, Clone)]
pub struct DataTypes {
    mappers: HashMap<PrimitiveType, TypeMapper>,
}

impl DataTypes {
    /// The Contentful mapping, one entry per primitive field type.
    pub fn contentful() -> Self {
        let mappers = PrimitiveType::ALL
            .into_iter()
            .map(|primitive| (primitive, contentful_mapper(primitive)))
            .collect();

        DataTypes { mappers }
    }

    pub fn descriptor(&self, primitive: PrimitiveType, field_key: &str) -> FieldDescriptor {
        let mapper = self
            .mappers
            .get(&primitive)
            .unwrap_or_else(|| panic!("Invariant violation: no schema type registered for field type {primitive}."));

        mapper(field_key)
    }
}

impl Default for DataTypes {
    fn default() -> Self {
        DataTypes::contentful()
    }
}

fn contentful_mapper(primitive: PrimitiveType) -> TypeMapper {
    match primitive {
        PrimitiveType::Symbol => |_| FieldDescriptor::new(ScalarType::String),
        // Long texts are stored as separate nodes.
        PrimitiveType::Text => |key| FieldDescriptor::new(SharedType::Text).linked(LinkExtension::node_reference(key)),
        PrimitiveType::Integer => |_| FieldDescriptor::new(ScalarType::Int),
        PrimitiveType::Number => |_| FieldDescriptor::new(ScalarType::Float),
        PrimitiveType::Date => |_| FieldDescriptor::new(ScalarType::Date).with_dateformat(),
        PrimitiveType::Object => |_| FieldDescriptor::new(ScalarType::Json),
        PrimitiveType::Boolean => |_| FieldDescriptor::new(ScalarType::Boolean),
        PrimitiveType::Location => |_| FieldDescriptor::new(SharedType::Location),
        PrimitiveType::RichText => |_| FieldDescriptor::new(SharedType::RichText),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema::DateFormatExtension;

    #[test]
    fn every_primitive_has_a_mapper() {
        let data_types = DataTypes::contentful();

        let rendered: Vec<String> = PrimitiveType::ALL
            .into_iter()
            .map(|primitive| format!("{primitive} -> {}", data_types.descriptor(primitive, "f").field_type))
            .collect();

        assert_eq!(
            rendered,
            [
                "Symbol -> String",
                "Text -> ContentfulText",
                "Integer -> Int",
                "Number -> Float",
                "Date -> Date",
                "Object -> JSON",
                "Boolean -> Boolean",
                "Location -> ContentfulLocation",
                "RichText -> ContentfulRichText",
            ]
        );
    }

    #[test]
    fn text_links_to_its_own_node() {
        let descriptor = DataTypes::default().descriptor(PrimitiveType::Text, "body");

        assert_eq!(descriptor.link(), Some(&LinkExtension::node_reference("body")));
        assert_eq!(descriptor.extensions.dateformat, None);
    }

    #[test]
    fn dates_reserve_an_empty_format_slot() {
        let descriptor = DataTypes::default().descriptor(PrimitiveType::Date, "publishDate");

        assert_eq!(descriptor.extensions.dateformat, Some(DateFormatExtension::default()));
        assert_eq!(descriptor.link(), None);
    }

    #[test]
    fn only_text_reads_the_field_key() {
        let data_types = DataTypes::default();

        for primitive in PrimitiveType::ALL {
            let linked = data_types.descriptor(primitive, "f").link().is_some();
            assert_eq!(linked, primitive == PrimitiveType::Text, "{primitive}");
        }
    }
}
