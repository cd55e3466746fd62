use thiserror::Error;

/// Errores del motor estructural.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("SMILES inválido: {0}")]
    InvalidSmiles(String),
    #[error("InChI inválido: {0}")]
    InvalidInchi(String),
}
