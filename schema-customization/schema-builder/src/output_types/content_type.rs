use super::shared;
use crate::{BuilderContext, ContentTypeError, SchemaError};
use content_model::{ContentTypeItem, field_key, make_type_name};
use schema::{FieldMap, NODE_INTERFACE, ObjectTypeDefinition, SchemaRegistrar, SharedType, TypeDefinition};
use std::collections::HashMap;

/// Builds the object type of a single content type.
pub(crate) fn build(ctx: &BuilderContext, item: &ContentTypeItem) -> Result<ObjectTypeDefinition, ContentTypeError> {
    let use_name_for_id = ctx.config.use_name_for_id;
    let identifier = item.type_identifier(use_name_for_id);

    // Sanitizing may drop every character of the identifier.
    if make_type_name("", identifier).is_empty() {
        let strategy = if use_name_for_id { "name" } else { "id" };
        return Err(ContentTypeError::EmptyIdentifier { strategy });
    }

    let type_name = make_type_name(&ctx.config.type_prefix, identifier);

    if type_name.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(ContentTypeError::InvalidTypeName { type_name });
    }

    let translator = ctx.translator();
    let mut fields = FieldMap::new();

    for field in item.active_fields() {
        let key = field_key(item.id(), &field.id);

        if fields.contains_key(&key) {
            return Err(ContentTypeError::DuplicateFieldKey {
                key,
                field: field.id.clone(),
            });
        }

        let descriptor = translator.translate_keyed(&key, field)?;
        fields.insert(key, descriptor.into());
    }

    let object = shared::entry_fields(ObjectTypeDefinition::new(type_name))
        .extend_fields(fields)
        .implements(SharedType::Reference.name())
        .implements(SharedType::Entry.name())
        .implements(NODE_INTERFACE)
        .dont_infer();

    Ok(match &item.description {
        Some(description) if !description.is_empty() => object.with_description(description),
        _ => object,
    })
}

/// Builds and registers every content type in model order. The first failure aborts the pass.
pub(crate) fn register_all(
    ctx: &BuilderContext,
    content_types: &[ContentTypeItem],
    registrar: &mut dyn SchemaRegistrar,
) -> Result<(), SchemaError> {
    // type name -> display name of the content type that claimed it
    let mut claimed: HashMap<String, &str> = HashMap::with_capacity(content_types.len());

    for item in content_types {
        let object = build(ctx, item).and_then(|object| match claimed.get(&object.name) {
            Some(other) => Err(ContentTypeError::DuplicateTypeName {
                type_name: object.name.clone(),
                other: (*other).to_owned(),
            }),
            None => Ok(object),
        });

        let object = object.map_err(|error| {
            let error = SchemaError::ContentType {
                content_type: item.display_name().to_owned(),
                error,
            };

            tracing::error!(content_type = item.id(), "{error}");
            error
        })?;

        tracing::debug!(
            content_type = item.id(),
            type_name = object.name.as_str(),
            fields = object.fields.len(),
            "Registering content type"
        );

        claimed.insert(object.name.clone(), item.display_name());
        registrar.create_types(vec![TypeDefinition::Object(object)])?;
    }

    Ok(())
}
