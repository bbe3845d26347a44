//! Renders schema declarations as GraphQL SDL, the way the host would print
//! them back after `createTypes`. We don't try to make the output pretty
//! beyond two-space indentation.
//!
//! All renderers implement `std::fmt::Display`. Query-time resolvers have no
//! SDL form and are left out.

#![deny(rust_2018_idioms, unsafe_code)]
#![warn(missing_docs)]

mod definition;
mod directive;
mod error;
mod field;
mod registrar;
mod value;

pub use definition::Definition;
pub use error::RenderError;
pub use registrar::SdlRegistrar;

use schema::TypeDefinition;

/// Renders `definitions` as one SDL document, separated by blank lines.
pub fn render<'a>(definitions: impl IntoIterator<Item = &'a TypeDefinition>) -> String {
    definitions
        .into_iter()
        .map(|definition| Definition(definition).to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
