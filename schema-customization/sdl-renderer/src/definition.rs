use crate::{directive::TypeDirectives, field::Field, value::Description};
use schema::{EnumTypeDefinition, ObjectTypeDefinition, TypeDefinition};
use std::fmt;

/// A `type`, `interface` or `enum` block.
#[derive(Debug, Clone, Copy)]
pub struct Definition<'a>(pub &'a TypeDefinition);

impl fmt::Display for Definition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            TypeDefinition::Object(object) => render_object(f, "type", object),
            TypeDefinition::Interface(interface) => render_object(f, "interface", interface),
            TypeDefinition::Enum(enum_type) => render_enum(f, enum_type),
        }
    }
}

fn render_object(f: &mut fmt::Formatter<'_>, keyword: &str, object: &ObjectTypeDefinition) -> fmt::Result {
    if let Some(text) = &object.description {
        write!(f, "{}", Description { text, indent: "" })?;
    }

    write!(f, "{keyword} {}", object.name)?;

    if !object.interfaces.is_empty() {
        write!(f, " implements {}", object.interfaces.join(" & "))?;
    }

    writeln!(f, "{} {{", TypeDirectives(object.extensions))?;

    for (name, field) in &object.fields {
        write!(f, "{}", Field { name, field })?;
    }

    f.write_str("}\n")
}

fn render_enum(f: &mut fmt::Formatter<'_>, enum_type: &EnumTypeDefinition) -> fmt::Result {
    if let Some(text) = &enum_type.description {
        write!(f, "{}", Description { text, indent: "" })?;
    }

    writeln!(f, "enum {} {{", enum_type.name)?;

    for (name, value) in &enum_type.values {
        if let Some(text) = &value.description {
            write!(f, "{}", Description { text, indent: "  " })?;
        }

        writeln!(f, "  {name}")?;
    }

    f.write_str("}\n")
}
