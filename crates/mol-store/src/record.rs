use diesel::prelude::*;
use diesel::sql_types::{Nullable, Text};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Documento persistido de una molécula, acotado a los campos que lee esta
/// capa. Los campos de identificador pueden faltar en documentos importados
/// a medias; su ausencia se trata como "no encontrado" en la operación que
/// los necesite, nunca como objeto parcial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, QueryableByName)]
pub struct MoleculeRecord {
    #[diesel(sql_type = Text)]
    pub id: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub inchi: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub inchikey: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub name: Option<String>,
}

impl MoleculeRecord {
    /// Identificador de objeto del registro, si es un UUID legible.
    pub fn object_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.id).ok()
    }
}

/// Documento de inserción. El identificador de objeto lo asigna el almacén.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMoleculeRecord {
    pub inchi: Option<String>,
    pub inchikey: Option<String>,
    pub name: Option<String>,
}
