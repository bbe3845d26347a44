pub(crate) mod asset;
pub(crate) mod content_type;
pub(crate) mod rich_text;
pub(crate) mod shared;

use crate::BuilderContext;
use schema::{RegistrarError, SchemaRegistrar, TypeDefinition};

/// Registers the types every content type builds on, one registrar call per step.
pub(crate) fn register_shared_types(
    ctx: &BuilderContext,
    registrar: &mut dyn SchemaRegistrar,
) -> Result<(), RegistrarError> {
    let steps: [Vec<TypeDefinition>; 10] = [
        vec![shared::reference_interface()],
        vec![shared::content_type_object()],
        vec![shared::sys_object()],
        vec![shared::entry_interface()],
        vec![shared::metadata_object()],
        vec![shared::tag_object()],
        asset::asset_types(ctx),
        rich_text::rich_text_types(),
        vec![shared::location_object()],
        vec![shared::text_object()],
    ];

    for types in steps {
        registrar.create_types(types)?;
    }

    Ok(())
}
