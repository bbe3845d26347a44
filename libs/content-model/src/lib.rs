//! The Contentful content model: content types and the typed field definitions
//! they declare, as returned by the `content_types` endpoint of the Contentful APIs.
//!
//! The model is read-only input for schema generation. Unknown field types and
//! link types are rejected while deserializing, so everything downstream can
//! match exhaustively.

#![deny(rust_2018_idioms, unsafe_code)]

mod content_type;
mod error;
mod field;
mod naming;

pub use content_type::{ContentTypeItem, ContentTypeSys};
pub use error::ContentModelError;
pub use field::{FieldDefinition, FieldItems, FieldType, LinkType, PrimitiveType};
pub use naming::{DEFAULT_TYPE_PREFIX, RESTRICTED_NODE_FIELDS, capitalize, field_key, make_type_name};

use serde_json::Value;

/// Parses a content model snapshot.
///
/// Accepts either a bare list of content types or a collection response of the
/// shape `{ "items": [...] }`.
pub fn from_json(json: &str) -> Result<Vec<ContentTypeItem>, ContentModelError> {
    let payload: Value = serde_json::from_str(json)?;

    let items = match payload {
        Value::Array(_) => payload,
        Value::Object(mut collection) => match collection.remove("items") {
            Some(items @ Value::Array(_)) => items,
            Some(other) => return Err(ContentModelError::unexpected(&other)),
            None => return Err(ContentModelError::MissingItems),
        },
        other => return Err(ContentModelError::unexpected(&other)),
    };

    Ok(serde_json::from_value(items)?)
}
