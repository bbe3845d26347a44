use crate::TypeDefinition;
use std::error::Error as StdError;
use thiserror::Error;

/// The host schema registry (`createTypes`).
pub trait SchemaRegistrar {
    /// Registers one or more declarations. Declarations may reference types
    /// registered later in the same pass.
    fn create_types(&mut self, types: Vec<TypeDefinition>) -> Result<(), RegistrarError>;
}

/// Error raised by the host registry, passed through untouched.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct RegistrarError(Box<dyn StdError + Send + Sync>);

impl RegistrarError {
    pub fn new(error: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        RegistrarError(error.into())
    }

    pub fn into_inner(self) -> Box<dyn StdError + Send + Sync> {
        self.0
    }
}
