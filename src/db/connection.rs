use crate::db::schema::create_tables;
use crate::errors::{Error, Result};
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument};

/// Shared handle to the single SQLite connection. The mutex serializes every
/// read and write, which is what keeps concurrent users from interleaving
/// partial writes.
pub type DbPool = Arc<Mutex<Connection>>;

/// Opens (or creates) the database at `db_path` and ensures the schema.
///
/// # Errors
///
/// Returns `Error::Database` if the file cannot be opened or the schema
/// statements fail.
#[instrument]
pub async fn init_db(db_path: &str) -> Result<DbPool> {
    debug!("Opening database at: {}", db_path);
    let conn = Connection::open(db_path)
        .map_err(|e| Error::Database(format!("Could not open database {}: {}", db_path, e)))?;

    create_tables(&conn)?;
    info!("Database ready at {}", db_path);

    Ok(Arc::new(Mutex::new(conn)))
}
