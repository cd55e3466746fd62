use crate::{has_substruct_match, Mol};

/// Consulta de subestructura compilada.
///
/// Una consulta vacía no acepta ninguna estructura. El filtro que la usa es
/// "fail-closed": una tabla bajo un contexto de búsqueda no debe mostrarse
/// sin filtrar solo porque todavía no haya consulta activa.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstructureQuery {
    mol: Option<Mol>,
}

impl SubstructureQuery {
    /// Compila la consulta sobre `mol`. Un grafo sin átomos produce la
    /// consulta vacía.
    pub fn new(mol: Mol) -> Self {
        if mol.is_empty() {
            Self { mol: None }
        } else {
            Self { mol: Some(mol) }
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.mol.is_none()
    }

    pub fn molecule(&self) -> Option<&Mol> {
        self.mol.as_ref()
    }

    /// `true` si `target` contiene la consulta; `false` con consulta vacía.
    pub fn matches(&self, target: &Mol) -> bool {
        match &self.mol {
            Some(query) => has_substruct_match(target, query),
            None => false,
        }
    }
}
