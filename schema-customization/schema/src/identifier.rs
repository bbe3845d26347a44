use crate::TypeRef;
use std::fmt;

/// Name of the interface every stored node implements. Provided by the host.
pub const NODE_INTERFACE: &str = "Node";
/// Interface for assets served from a remote URL. Provided by the host.
pub const REMOTE_FILE_INTERFACE: &str = "RemoteFile";
/// Locally materialized file nodes. Provided by the host.
pub const FILE_TYPE: &str = "File";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Id,
    String,
    Int,
    Float,
    Boolean,
    Date,
    Json,
}

impl ScalarType {
    pub const fn name(self) -> &'static str {
        match self {
            ScalarType::Id => "ID",
            ScalarType::String => "String",
            ScalarType::Int => "Int",
            ScalarType::Float => "Float",
            ScalarType::Boolean => "Boolean",
            ScalarType::Date => "Date",
            ScalarType::Json => "JSON",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<ScalarType> for TypeRef {
    fn from(scalar: ScalarType) -> Self {
        TypeRef::named(scalar.name())
    }
}

/// Types declared once per pass and shared by every content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SharedType {
    Reference,
    ContentType,
    Sys,
    Entry,
    Metadata,
    Tag,
    ImageResizingBehavior,
    ImageCropFocus,
    Asset,
    RichTextAssets,
    RichTextEntries,
    RichTextLinks,
    RichText,
    Location,
    Text,
}

impl SharedType {
    pub const fn name(self) -> &'static str {
        match self {
            SharedType::Reference => "ContentfulReference",
            SharedType::ContentType => "ContentfulContentType",
            SharedType::Sys => "ContentfulSys",
            SharedType::Entry => "ContentfulEntry",
            SharedType::Metadata => "ContentfulMetadata",
            SharedType::Tag => "ContentfulTag",
            SharedType::ImageResizingBehavior => "ImageResizingBehavior",
            SharedType::ImageCropFocus => "ContentfulImageCropFocus",
            SharedType::Asset => "ContentfulAsset",
            SharedType::RichTextAssets => "ContentfulRichTextAssets",
            SharedType::RichTextEntries => "ContentfulRichTextEntries",
            SharedType::RichTextLinks => "ContentfulRichTextLinks",
            SharedType::RichText => "ContentfulRichText",
            SharedType::Location => "ContentfulLocation",
            SharedType::Text => "ContentfulText",
        }
    }
}

impl fmt::Display for SharedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<SharedType> for TypeRef {
    fn from(shared: SharedType) -> Self {
        TypeRef::named(shared.name())
    }
}
