use crate::{RenderError, render};
use schema::{RegistrarError, SchemaRegistrar, TypeDefinition};
use std::collections::HashSet;

/// A registrar that keeps declarations in registration order and prints them as SDL.
///
/// A batch containing a name that is already taken is rejected as a whole.
#[derive(Debug, Default)]
pub struct SdlRegistrar {
    definitions: Vec<TypeDefinition>,
}

impl SdlRegistrar {
    /// An empty registrar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything registered so far.
    pub fn definitions(&self) -> &[TypeDefinition] {
        &self.definitions
    }

    /// The declaration registered under `name`.
    pub fn find(&self, name: &str) -> Option<&TypeDefinition> {
        self.definitions.iter().find(|definition| definition.name() == name)
    }

    /// The full SDL document.
    pub fn render(&self) -> String {
        render(&self.definitions)
    }

    fn check_names(&self, types: &[TypeDefinition]) -> Result<(), RenderError> {
        let mut names: HashSet<&str> = self.definitions.iter().map(TypeDefinition::name).collect();

        for definition in types {
            if !names.insert(definition.name()) {
                return Err(RenderError::DuplicateType {
                    name: definition.name().to_owned(),
                });
            }
        }

        Ok(())
    }
}

impl SchemaRegistrar for SdlRegistrar {
    fn create_types(&mut self, types: Vec<TypeDefinition>) -> Result<(), RegistrarError> {
        self.check_names(&types).map_err(RegistrarError::new)?;
        self.definitions.extend(types);

        Ok(())
    }
}
