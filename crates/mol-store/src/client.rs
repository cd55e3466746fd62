use std::sync::Mutex;
use std::time::Duration;

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::result::Error as DieselError;
use diesel::sql_types::{Nullable, Text};
use mol_domain::{Molecule, MoleculeRef};
use once_cell::sync::Lazy;
use uuid::Uuid;

use crate::{MoleculeRecord, NewMoleculeRecord, StoreConfig, StoreError};

type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;
type SqlitePooledConn = PooledConnection<ConnectionManager<SqliteConnection>>;

static INSTANCE: Lazy<Mutex<StoreClient>> =
    Lazy::new(|| Mutex::new(StoreClient::new(StoreConfig::from_env())));

/// Cliente global del proceso sobre la configuración de entorno.
///
/// La primera conexión se establece de forma perezosa al usar el cliente y
/// debe producirse desde un único hilo (normalmente el hilo de UI de la
/// aplicación). Mientras no haya conexión, cada operación vuelve a intentar
/// conectar; no hay backoff ni límite de reintentos.
pub fn instance() -> &'static Mutex<StoreClient> {
    &INSTANCE
}

/// Cliente del almacén documental de moléculas.
///
/// Mantiene como mucho una conexión viva. "Desconectado" es un estado normal
/// y recuperable: cada operación reintenta la conexión y, si sigue sin haber
/// almacén, degrada a `None` en lugar de propagar un error. Todas las
/// operaciones son viajes síncronos al almacén; mantener los recorridos
/// largos fuera de un hilo sensible a la latencia es responsabilidad del
/// llamante.
pub struct StoreClient {
    config: StoreConfig,
    pool: Option<SqlitePool>,
}

impl StoreClient {
    /// Crea un cliente desconectado sobre `config`.
    pub fn new(config: StoreConfig) -> Self {
        Self { config, pool: None }
    }

    /// Abre la conexión si no existe ya. Idempotente.
    ///
    /// Relee la URL configurada en cada intento, de modo que un cambio de
    /// configuración surte efecto en el siguiente intento sin reiniciar.
    pub fn connect(&mut self) -> Result<(), StoreError> {
        if self.pool.is_some() {
            return Ok(());
        }
        let url = self.config.database_url()?;
        let manager = ConnectionManager::<SqliteConnection>::new(&url);
        let pool = Pool::builder()
            .max_size(1)
            .connection_timeout(Duration::from_secs(2))
            .build(manager)
            .map_err(|e| StoreError::Connection(format!("'{}': {}", url, e)))?;
        if let Ok(mut conn) = pool.get() {
            let _ = diesel::sql_query("PRAGMA busy_timeout = 5000;").execute(&mut conn);
        }
        log::info!("Conectado al almacén en '{}'", url);
        self.pool = Some(pool);
        Ok(())
    }

    /// `true` si hay una conexión abierta. Sin efectos secundarios.
    pub fn is_connected(&self) -> bool {
        self.pool.is_some()
    }

    /// Ref de la molécula cuyo campo `inchi` coincide exactamente con el
    /// valor dado. `None` sin conexión o sin resultado.
    pub fn find_molecule_from_inchi(&mut self, inchi: &str) -> Option<MoleculeRef> {
        self.find_by_field("inchi", inchi)
    }

    /// Ref de la molécula cuyo campo `inchikey` coincide exactamente.
    pub fn find_molecule_from_inchikey(&mut self, inchikey: &str) -> Option<MoleculeRef> {
        self.find_by_field("inchikey", inchikey)
    }

    /// Normaliza un registro ya traído a su ref canónica re-resolviendo por
    /// su InChIKey. `None` si el registro no trae ese campo.
    pub fn find_molecule_from_record(&mut self, record: &MoleculeRecord) -> Option<MoleculeRef> {
        let inchikey = record.inchikey.clone()?;
        self.find_molecule_from_inchikey(&inchikey)
    }

    /// Registro completo de la molécula referenciada.
    pub fn fetch_molecule(&mut self, molecule: &MoleculeRef) -> Option<MoleculeRecord> {
        self.fetch_by_field("id", &molecule.id().to_string())
    }

    /// Registros para una secuencia de refs, en el mismo orden. Un viaje al
    /// almacén por ref, sin agrupar; cada fallo es independiente y no aborta
    /// ni reordena el resto.
    pub fn fetch_molecules(&mut self, molecules: &[MoleculeRef]) -> Vec<Option<MoleculeRecord>> {
        molecules.iter().map(|m| self.fetch_molecule(m)).collect()
    }

    /// Construye el objeto de dominio para `molecule` y cede su propiedad al
    /// llamante. `None` si el registro falta o no trae el campo `inchi`: de
    /// un registro sin identificador nunca se construye un objeto parcial, y
    /// la ausencia es un resultado esperado, no una excepción.
    pub fn create_molecule(&mut self, molecule: &MoleculeRef) -> Option<Molecule> {
        let record = self.fetch_molecule(molecule)?;
        let inchi = record.inchi.as_deref()?;
        let mut built = match Molecule::from_inchi(inchi) {
            Ok(m) => m,
            Err(e) => {
                log::warn!("InChI ilegible en {}: {}", molecule, e);
                return None;
            }
        };
        if let Some(name) = record.name {
            built.set_name(name);
        }
        Some(built)
    }

    /// Inserta un documento de molécula y devuelve la ref asignada por el
    /// almacén. Crea la colección configurada si aún no existe.
    pub fn insert_molecule(&mut self, record: &NewMoleculeRecord) -> Option<MoleculeRef> {
        let collection = self.config.collection_name();
        let mut conn = self.conn()?;
        if let Err(e) = ensure_collection(&mut conn, &collection) {
            log::warn!("No se pudo crear la colección \"{}\": {}", collection, e);
            return None;
        }
        let id = Uuid::new_v4();
        let sql = format!(
            "INSERT INTO \"{}\" (id, inchi, inchikey, name) VALUES (?, ?, ?, ?)",
            collection
        );
        let result = diesel::sql_query(sql)
            .bind::<Text, _>(id.to_string())
            .bind::<Nullable<Text>, _>(record.inchi.as_deref())
            .bind::<Nullable<Text>, _>(record.inchikey.as_deref())
            .bind::<Nullable<Text>, _>(record.name.as_deref())
            .execute(&mut conn);
        match result {
            Ok(_) => Some(MoleculeRef::new(id)),
            Err(e) => {
                log::warn!("No se pudo insertar en \"{}\": {}", collection, e);
                None
            }
        }
    }

    fn find_by_field(&mut self, field: &str, value: &str) -> Option<MoleculeRef> {
        let record = self.fetch_by_field(field, value)?;
        let id = record.object_id()?;
        Some(MoleculeRef::new(id))
    }

    /// Búsqueda de un único documento por igualdad sobre un campo con nombre.
    /// El nombre de la colección se recalcula aquí en cada llamada.
    fn fetch_by_field(&mut self, field: &str, value: &str) -> Option<MoleculeRecord> {
        let collection = self.config.collection_name();
        let mut conn = self.conn()?;
        let sql = format!(
            "SELECT id, inchi, inchikey, name FROM \"{}\" WHERE {} = ? LIMIT 1",
            collection, field
        );
        match diesel::sql_query(sql)
            .bind::<Text, _>(value)
            .get_result::<MoleculeRecord>(&mut conn)
        {
            Ok(record) => Some(record),
            Err(DieselError::NotFound) => None,
            Err(e) => {
                // Una colección todavía inexistente se observa igual que
                // "sin resultado".
                log::debug!("Consulta sobre \"{}\" sin resultado: {}", collection, e);
                None
            }
        }
    }

    /// Conexión del pool, reintentando la conexión si el cliente está
    /// desconectado. Los fallos se registran y devuelven `None`.
    fn conn(&mut self) -> Option<SqlitePooledConn> {
        if self.pool.is_none() {
            if let Err(e) = self.connect() {
                log::warn!("Sin conexión con el almacén: {}", e);
                return None;
            }
        }
        match self.pool.as_ref()?.get() {
            Ok(conn) => Some(conn),
            Err(e) => {
                log::warn!("No se pudo obtener la conexión del pool: {}", e);
                None
            }
        }
    }
}

fn ensure_collection(conn: &mut SqlitePooledConn, collection: &str) -> QueryResult<usize> {
    diesel::sql_query(format!(
        "CREATE TABLE IF NOT EXISTS \"{}\" (id TEXT PRIMARY KEY, inchi TEXT, inchikey TEXT, name TEXT)",
        collection
    ))
    .execute(conn)
}
