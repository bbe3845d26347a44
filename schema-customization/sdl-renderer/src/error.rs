use thiserror::Error;

/// Errors raised while collecting declarations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A declaration reused the name of an earlier one.
    #[error("The schema already contains a type named `{name}`.")]
    DuplicateType {
        /// The conflicting type name.
        name: String,
    },
}
