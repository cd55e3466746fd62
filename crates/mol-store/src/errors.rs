use thiserror::Error;

/// Errores de la capa de acceso al almacén.
///
/// Solo `connect` e `insert_molecule` los producen hacia el log; las
/// búsquedas degradan a `None`, de modo que "sin conexión" y "sin resultado"
/// se observan igual desde el código llamante.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Configuración incompleta: {0}")]
    Config(String),
    #[error("No se pudo conectar con el almacén: {0}")]
    Connection(String),
    #[error("Error de almacenamiento: {0}")]
    Storage(String),
}
