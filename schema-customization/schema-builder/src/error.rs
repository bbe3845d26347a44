use schema::RegistrarError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Unable to create schema for Contentful Content Type {content_type}:\n{error}")]
    ContentType {
        /// Display name of the content type, or its id when unnamed.
        content_type: String,
        error: ContentTypeError,
    },

    #[error(transparent)]
    Registrar(#[from] RegistrarError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentTypeError {
    #[error(transparent)]
    Field(#[from] TranslateError),

    #[error("The type name `{type_name}` is already used by content type {other}.")]
    DuplicateTypeName { type_name: String, other: String },

    #[error("The content type {strategy} the type name is derived from has no characters usable in a type name.")]
    EmptyIdentifier { strategy: &'static str },

    #[error("`{type_name}` is not a valid type name, type names cannot start with a digit.")]
    InvalidTypeName { type_name: String },

    #[error("Field `{field}` is stored under `{key}`, which another field of the content type already uses.")]
    DuplicateFieldKey { key: String, field: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslateError {
    #[error("Field `{field}` is an Array without an `items` definition.")]
    MissingItems { field: String },

    #[error("Field `{field}` is a link without a `linkType`.")]
    MissingLinkType { field: String },

    #[error("Field `{field}` is an Array of Arrays.")]
    NestedArray { field: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid plugin options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
