//! Crate `mol-filter` — filtro de subestructura por filas.
//!
//! Reformulación del modelo proxy original como un predicado puro: la UI (o
//! cualquier abstracción de tabla) pregunta fila a fila con `accepts_row`,
//! sin heredar de ninguna clase base de filtrado. El filtro guarda el último
//! identificador aplicado y la consulta compilada a partir de él.

use mol_domain::Molecule;
use mol_engine::{parse_inchi, parse_smiles, SubstructureQuery, INCHI_PREFIX};

/// Filtro de subestructura sobre un conjunto tabular de resultados.
///
/// La consulta compilada solo se rederiva cuando el identificador cambia;
/// nunca se evalúa un compilado obsoleto contra un identificador distinto
/// del que lo produjo. Un identificador vacío o ilegible deja la consulta
/// vacía y el filtro no acepta ninguna fila ("fail-closed"): bajo un
/// contexto de búsqueda por similitud la tabla no debe mostrarse sin filtrar
/// solo porque no haya consulta activa.
#[derive(Debug, Clone, Default)]
pub struct SubstructureFilter {
    identifier: String,
    query: SubstructureQuery,
}

impl SubstructureFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fija el identificador de la molécula de consulta. Si empieza por
    /// `InChI=` se interpreta entero como InChI canónico; en caso contrario,
    /// como notación corta (SMILES).
    pub fn set_identifier(&mut self, identifier: &str) {
        if identifier == self.identifier {
            return;
        }
        self.identifier = identifier.to_string();
        self.query = compile(identifier);
    }

    /// Último identificador aplicado, tal cual se recibió.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// `true` si la molécula de la fila contiene la consulta compilada. La
    /// molécula llega de los datos de dominio de la fila; aquí no se vuelve
    /// a consultar el almacén. Con la consulta vacía ninguna fila se acepta.
    pub fn accepts_row(&self, molecule: &Molecule) -> bool {
        self.query.matches(molecule.structure())
    }

    /// El filtro restringe filas, nunca columnas.
    pub fn accepts_column(&self, _column: usize) -> bool {
        true
    }
}

fn compile(identifier: &str) -> SubstructureQuery {
    let trimmed = identifier.trim();
    if trimmed.is_empty() {
        return SubstructureQuery::empty();
    }
    let parsed = if trimmed.starts_with(INCHI_PREFIX) {
        parse_inchi(trimmed)
    } else {
        parse_smiles(trimmed)
    };
    match parsed {
        Ok(mol) => SubstructureQuery::new(mol),
        Err(e) => {
            log::warn!("Identificador de consulta ilegible '{}': {}", trimmed, e);
            SubstructureQuery::empty()
        }
    }
}
