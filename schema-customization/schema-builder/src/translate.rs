use crate::{DataTypes, TranslateError};
use content_model::{FieldDefinition, FieldType, LinkType};
use schema::{DateFormatExtension, FieldExtensions, LinkExtension, OutputField, SharedType, TypeRef};

/// The schema shape of a single content field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub field_type: TypeRef,
    pub extensions: FieldExtensions,
}

impl FieldDescriptor {
    pub fn new(field_type: impl Into<TypeRef>) -> Self {
        FieldDescriptor {
            field_type: field_type.into(),
            extensions: FieldExtensions::default(),
        }
    }

    pub fn linked(mut self, link: LinkExtension) -> Self {
        self.extensions.link = Some(link);
        self
    }

    pub fn with_dateformat(mut self) -> Self {
        self.extensions.dateformat = Some(DateFormatExtension::default());
        self
    }

    /// Wraps the type in a list, keeping the extensions.
    pub fn into_list(mut self) -> Self {
        self.field_type = self.field_type.list();
        self
    }

    pub fn required_if(mut self, required: bool) -> Self {
        self.field_type = self.field_type.required_if(required);
        self
    }

    pub fn link(&self) -> Option<&LinkExtension> {
        self.extensions.link.as_ref()
    }
}

impl From<FieldDescriptor> for OutputField {
    fn from(descriptor: FieldDescriptor) -> Self {
        let mut field = OutputField::new(descriptor.field_type);
        field.extensions = descriptor.extensions;
        field
    }
}

/// Resolves content fields into descriptors.
#[derive(Debug, Clone, Copy)]
pub struct FieldTranslator<'a> {
    data_types: &'a DataTypes,
}

impl<'a> FieldTranslator<'a> {
    pub fn new(data_types: &'a DataTypes) -> Self {
        FieldTranslator { data_types }
    }

    /// Translates a field stored under its own id.
    pub fn translate(&self, field: &FieldDefinition) -> Result<FieldDescriptor, TranslateError> {
        self.translate_keyed(&field.id, field)
    }

    /// Translates a field stored under `key`. Link directives point at `key`.
    pub fn translate_keyed(&self, key: &str, field: &FieldDefinition) -> Result<FieldDescriptor, TranslateError> {
        let descriptor = match field.field_type {
            FieldType::Array => self.translate_items(key, field)?.into_list(),
            FieldType::Link => {
                let link_type = field.link_type.ok_or_else(|| TranslateError::MissingLinkType {
                    field: field.id.clone(),
                })?;

                link_descriptor(key, link_type)
            }
            field_type => self.dispatch(key, field_type),
        };

        // Required-ness belongs to the field, so it wraps the list rather than its elements.
        Ok(descriptor.required_if(field.required))
    }

    fn translate_items(&self, key: &str, field: &FieldDefinition) -> Result<FieldDescriptor, TranslateError> {
        let items = field.items.as_ref().ok_or_else(|| TranslateError::MissingItems {
            field: field.id.clone(),
        })?;

        match items.item_type {
            FieldType::Link => items
                .link_type
                .map(|link_type| link_descriptor(key, link_type))
                .ok_or_else(|| TranslateError::MissingLinkType {
                    field: field.id.clone(),
                }),
            FieldType::Array => Err(TranslateError::NestedArray {
                field: field.id.clone(),
            }),
            item_type => Ok(self.dispatch(key, item_type)),
        }
    }

    fn dispatch(&self, key: &str, field_type: FieldType) -> FieldDescriptor {
        match field_type.primitive() {
            Some(primitive) => self.data_types.descriptor(primitive, key),
            None => unreachable!("Invariant violation: {field_type:?} is resolved before dispatch."),
        }
    }
}

/// Links resolve to the generic category type, never to a specific content type.
fn link_descriptor(key: &str, link_type: LinkType) -> FieldDescriptor {
    let target = match link_type {
        LinkType::Asset => SharedType::Asset,
        LinkType::Entry => SharedType::Entry,
    };

    FieldDescriptor::new(target).linked(LinkExtension::node_reference(key))
}
