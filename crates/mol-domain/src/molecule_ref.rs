use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Referencia ligera, inmutable y copiable a una molécula persistida.
///
/// Solo transporta el identificador de objeto asignado por el almacén, nunca
/// el contenido de la molécula. Semántica de valor: dos refs son iguales si y
/// solo si sus identificadores lo son. La ausencia de referencia se expresa
/// como `Option<MoleculeRef>` en las APIs; no existe un valor "inválido" que
/// pueda resolverse por accidente contra un registro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoleculeRef {
    id: Uuid,
}

impl MoleculeRef {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl fmt::Display for MoleculeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MoleculeRef({})", self.id)
    }
}
