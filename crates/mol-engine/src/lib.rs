//! Crate `mol-engine` — modelo estructural mínimo para el visor de moléculas.
//!
//! Este crate cubre la costura de "biblioteca quimioinformática externa" que
//! consume la capa de acceso a datos: construir un grafo de átomos pesados a
//! partir de un identificador químico (SMILES o InChI) y decidir si una
//! estructura contiene a otra como subestructura.
//!
//! Alcance deliberadamente acotado: el grafo conserva elemento y
//! conectividad, no órdenes de enlace ni estereoquímica. Es suficiente para
//! el test de contención que usa el filtro de filas; no es un motor químico
//! general.

mod errors;
mod inchi;
mod mol;
mod query;
mod smiles;
mod substruct;

pub use errors::EngineError;
pub use inchi::{parse_inchi, INCHI_PREFIX};
pub use mol::{Atom, Bond, Mol};
pub use query::SubstructureQuery;
pub use smiles::parse_smiles;
pub use substruct::has_substruct_match;
