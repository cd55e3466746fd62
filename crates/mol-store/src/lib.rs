//! Crate `mol-store` — cliente del almacén documental de moléculas.
//!
//! Expone `StoreClient` (ciclo de vida de la conexión y acceso a registros),
//! el registro tipado `MoleculeRecord` y la configuración leída del entorno
//! en cada operación. Las búsquedas devuelven `Option`: "sin conexión" y
//! "no encontrado" degradan al mismo valor centinela, igual que en la
//! aplicación original, y el diagnóstico va al log.
//!
//! Modelo de concurrencia: llamadas síncronas y bloqueantes, sin timeout ni
//! cancelación por operación. La primera conexión debe establecerse desde un
//! único hilo; véase [`instance`].

mod client;
mod config;
mod errors;
mod record;

pub use client::{instance, StoreClient};
pub use config::StoreConfig;
pub use errors::StoreError;
pub use record::{MoleculeRecord, NewMoleculeRecord};
