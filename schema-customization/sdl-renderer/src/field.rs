use crate::{
    directive::FieldDirectives,
    value::{Description, Literal},
};
use schema::{ArgumentMap, InputValue, OutputField};
use std::fmt;

const FIELD_INDENT: &str = "  ";
const ARGUMENT_INDENT: &str = "    ";

/// A field line inside a type or interface block.
///
/// ```ignore
/// type ContentfulBlogPost {
///   author: ContentfulEntry! @link(by: "id", from: "author___NODE")
/// //^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^ this
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub(crate) struct Field<'a> {
    pub(crate) name: &'a str,
    pub(crate) field: &'a OutputField,
}

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(text) = &self.field.description {
            write!(f, "{}", Description { text, indent: FIELD_INDENT })?;
        }

        writeln!(
            f,
            "{FIELD_INDENT}{}{}: {}{}",
            self.name,
            Arguments(&self.field.args),
            self.field.field_type,
            FieldDirectives(&self.field.extensions)
        )
    }
}

/// Field arguments. Documented arguments force one argument per line.
struct Arguments<'a>(&'a ArgumentMap);

impl fmt::Display for Arguments<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }

        let multiline = self.0.values().any(|arg| arg.description.is_some());

        if !multiline {
            let args: Vec<String> = self
                .0
                .iter()
                .map(|(name, arg)| Argument { name, arg }.to_string())
                .collect();

            return write!(f, "({})", args.join(", "));
        }

        f.write_str("(\n")?;

        for (name, arg) in self.0 {
            if let Some(text) = &arg.description {
                write!(f, "{}", Description { text, indent: ARGUMENT_INDENT })?;
            }

            writeln!(f, "{ARGUMENT_INDENT}{}", Argument { name, arg })?;
        }

        write!(f, "{FIELD_INDENT})")
    }
}

struct Argument<'a> {
    name: &'a str,
    arg: &'a InputValue,
}

impl fmt::Display for Argument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.arg.value_type)?;

        if let Some(default) = &self.arg.default_value {
            write!(f, " = {}", Literal(default))?;
        }

        Ok(())
    }
}
