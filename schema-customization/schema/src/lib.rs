//! Declarations of the Contentful graph schema, and the seams to the host that
//! registers them and later resolves queries against them.
//!
//! Everything in here is plain data: building a declaration never touches the
//! node store. Resolvers attached to fields only run at query time, through
//! [`FieldResolver::resolve`].

#![deny(rust_2018_idioms, unsafe_code)]

mod definition;
mod enum_type;
mod identifier;
mod input_types;
mod node;
mod output_types;
mod registrar;
mod remote_file;
mod resolver;
mod rich_text;
mod type_ref;

pub use definition::*;
pub use enum_type::*;
pub use identifier::*;
pub use input_types::*;
pub use node::*;
pub use output_types::*;
pub use registrar::*;
pub use remote_file::*;
pub use resolver::*;
pub use rich_text::*;
pub use type_ref::*;

use indexmap::IndexMap;

/// Fields of an object or interface type, in declaration order.
pub type FieldMap = IndexMap<String, OutputField>;
