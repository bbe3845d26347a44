use crate::{EnumTypeDefinition, InterfaceTypeDefinition, ObjectTypeDefinition};

/// A declaration handed to the schema registrar.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDefinition {
    Object(ObjectTypeDefinition),
    Interface(InterfaceTypeDefinition),
    Enum(EnumTypeDefinition),
}

impl TypeDefinition {
    pub fn name(&self) -> &str {
        match self {
            TypeDefinition::Object(object) | TypeDefinition::Interface(object) => &object.name,
            TypeDefinition::Enum(enum_type) => &enum_type.name,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectTypeDefinition> {
        match self {
            TypeDefinition::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceTypeDefinition> {
        match self {
            TypeDefinition::Interface(interface) => Some(interface),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumTypeDefinition> {
        match self {
            TypeDefinition::Enum(enum_type) => Some(enum_type),
            _ => None,
        }
    }

    /// Whether the host may extend the type with fields inferred from data.
    pub fn infers_fields(&self) -> bool {
        match self {
            TypeDefinition::Object(object) | TypeDefinition::Interface(object) => object.extensions.infer,
            TypeDefinition::Enum(_) => false,
        }
    }
}

impl From<EnumTypeDefinition> for TypeDefinition {
    fn from(enum_type: EnumTypeDefinition) -> Self {
        TypeDefinition::Enum(enum_type)
    }
}
