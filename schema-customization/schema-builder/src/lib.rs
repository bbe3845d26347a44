//! Contentful schema builder. Turns a content model snapshot into schema declarations.
//!
//! A pass registers, in order:
//!
//! ```text
//! ContentfulReference, ContentfulContentType, ContentfulSys, ContentfulEntry,
//! ContentfulMetadata, ContentfulTag, image enums + ContentfulAsset,
//! rich text types, ContentfulLocation, ContentfulText,
//! one object type per content type
//! ```
//!
//! Shared types are emitted first so content types can link to them; the
//! registrar resolves references by name, so order only matters for readers
//! of the registered output.
//!
//! Content type fields go through the [`FieldTranslator`], which dispatches
//! primitive field types to the [`DataTypes`] registry and resolves links and
//! arrays itself. The first content type that cannot be translated aborts the
//! pass; there is no partial schema.

#![deny(rust_2018_idioms, unsafe_code)]

pub mod constants;

mod config;
mod data_types;
mod error;
mod output_types;
mod translate;

pub use config::PluginConfig;
pub use data_types::{DataTypes, TypeMapper};
pub use error::{ConfigError, ContentTypeError, SchemaError, TranslateError};
pub use translate::{FieldDescriptor, FieldTranslator};

use content_model::ContentTypeItem;
use schema::{FieldResolver, RemoteFileSupport, SchemaRegistrar};
use std::sync::Arc;

/// Inputs shared by every step of a pass. Immutable once constructed.
pub struct BuilderContext {
    config: PluginConfig,
    data_types: DataTypes,
    remote_files: Arc<dyn RemoteFileSupport>,
    image_data_resolver: FieldResolver,
}

impl BuilderContext {
    pub fn new(
        config: PluginConfig,
        data_types: DataTypes,
        remote_files: Arc<dyn RemoteFileSupport>,
        image_data_resolver: FieldResolver,
    ) -> Self {
        BuilderContext {
            config,
            data_types,
            remote_files,
            image_data_resolver,
        }
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    pub fn translator(&self) -> FieldTranslator<'_> {
        FieldTranslator::new(&self.data_types)
    }
}

/// Registers the complete Contentful schema for `content_types`.
pub fn create_schema_customization(
    ctx: &BuilderContext,
    content_types: &[ContentTypeItem],
    registrar: &mut dyn SchemaRegistrar,
) -> Result<(), SchemaError> {
    tracing::debug!(
        content_types = content_types.len(),
        download_local = ctx.config.download_local,
        use_name_for_id = ctx.config.use_name_for_id,
        "Creating Contentful schema customization"
    );

    output_types::register_shared_types(ctx, registrar)?;
    output_types::content_type::register_all(ctx, content_types, registrar)
}
