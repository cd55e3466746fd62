use mol_engine::EngineError;
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum DomainError {
    #[error("Error de validación: {0}")]
    ValidationError(String),
    #[error("Error de estructura: {0}")]
    StructureError(String),
}

impl From<EngineError> for DomainError {
    fn from(e: EngineError) -> Self {
        Self::StructureError(e.to_string())
    }
}
