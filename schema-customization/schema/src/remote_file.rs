use crate::{ArgumentMap, FieldResolver, ObjectTypeDefinition, OutputField};

/// The host's remote file and image subsystem.
pub trait RemoteFileSupport: Send + Sync {
    /// Builds the derived image field. `args` are offered in addition to the
    /// subsystem's own arguments and passed to `resolver` at query time.
    fn image_data_field(&self, resolver: FieldResolver, args: ArgumentMap) -> OutputField;

    /// Adds whatever fields and interfaces generic remote file support needs.
    fn add_remote_file_interface(&self, object: ObjectTypeDefinition) -> ObjectTypeDefinition;
}
