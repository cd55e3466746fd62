use std::fmt;

use mol_engine::{parse_inchi, Mol};
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Molécula de dominio construida a partir de un InChI canónico.
///
/// El parseo estructural se delega en `mol-engine`; esta capa solo añade el
/// nombre opcional para mostrar. El objeto es clonable: los consumidores que
/// compartan la misma molécula entre varias vistas pueden envolverla en `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Molecule {
    inchi: String,
    structure: Mol,
    name: Option<String>,
}

impl Molecule {
    pub fn from_inchi(inchi: &str) -> Result<Self, DomainError> {
        let trimmed = inchi.trim();
        if trimmed.is_empty() {
            return Err(DomainError::ValidationError(
                "InChI no puede estar vacío".to_string(),
            ));
        }
        let structure = parse_inchi(trimmed)?;
        Ok(Self {
            inchi: trimmed.to_string(),
            structure,
            name: None,
        })
    }

    pub fn inchi(&self) -> &str {
        &self.inchi
    }

    pub fn structure(&self) -> &Mol {
        &self.structure
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }
}

impl fmt::Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Molecule({}, InChI: {})",
            self.name.as_deref().unwrap_or("<sin nombre>"),
            self.inchi
        )
    }
}
