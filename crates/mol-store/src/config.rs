use crate::StoreError;

const DB_URL_VAR: &str = "MOLVIEW_DB_URL";
const DB_URL_FALLBACK_VAR: &str = "DATABASE_URL";
const COLLECTION_VAR: &str = "MOLVIEW_COLLECTION";
const DEFAULT_COLLECTION: &str = "chem";
const COLLECTION_SUFFIX: &str = "molecules";

/// Configuración del cliente del almacén.
///
/// En la variante de entorno los valores se leen de nuevo en cada operación,
/// nunca se cachean: un cambio de configuración externo surte efecto en la
/// siguiente operación sin reiniciar el proceso.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    fixed: Option<Fixed>,
}

#[derive(Debug, Clone)]
struct Fixed {
    database_url: String,
    collection: String,
}

impl StoreConfig {
    /// Configuración respaldada por variables de entorno: `MOLVIEW_DB_URL`
    /// (o `DATABASE_URL` como alternativa) y `MOLVIEW_COLLECTION`. Carga un
    /// fichero `.env` si existe.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self { fixed: None }
    }

    /// Configuración fija; útil en pruebas para no depender del entorno.
    pub fn fixed(database_url: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            fixed: Some(Fixed {
                database_url: database_url.into(),
                collection: collection.into(),
            }),
        }
    }

    pub fn database_url(&self) -> Result<String, StoreError> {
        match &self.fixed {
            Some(f) => Ok(f.database_url.clone()),
            None => std::env::var(DB_URL_VAR)
                .or_else(|_| std::env::var(DB_URL_FALLBACK_VAR))
                .map_err(|_| {
                    StoreError::Config(format!(
                        "{} / {} no definidas",
                        DB_URL_VAR, DB_URL_FALLBACK_VAR
                    ))
                }),
        }
    }

    /// Nombre completo de la colección de moléculas: el nombre corto
    /// configurado más el sufijo fijo `molecules`.
    pub fn collection_name(&self) -> String {
        let short = match &self.fixed {
            Some(f) => f.collection.clone(),
            None => std::env::var(COLLECTION_VAR).unwrap_or_else(|_| DEFAULT_COLLECTION.to_string()),
        };
        format!("{}.{}", short, COLLECTION_SUFFIX)
    }
}
