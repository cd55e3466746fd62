//! Crate `mol-domain` — tipos de dominio del visor de moléculas.
//!
//! Define el objeto `Molecule` (construido a partir de un InChI canónico a
//! través de `mol-engine`), la referencia ligera `MoleculeRef` con semántica
//! de valor y los errores del dominio.

mod errors;
mod identifiers;
mod molecule;
mod molecule_ref;

pub use errors::DomainError;
pub use identifiers::validate_inchikey;
pub use molecule::Molecule;
pub use molecule_ref::MoleculeRef;
