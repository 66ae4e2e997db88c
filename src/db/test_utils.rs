#![allow(dead_code)]
use crate::db::{DbPool, schema};
use crate::errors::{Error, Result};
use rusqlite::{Connection, params};
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

pub(crate) fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}

// Fresh in-memory database per test, schema already applied.
pub(crate) async fn setup_test_db() -> Result<DbPool> {
    let conn = Connection::open_in_memory()
        .map_err(|e| Error::Database(format!("Test DB: Failed to open in-memory: {}", e)))?;
    schema::create_tables(&conn)?;
    Ok(Arc::new(Mutex::new(conn)))
}

// Raw insert helpers so tests can shape the tables without going through the
// functions under test.
pub(crate) fn direct_insert_transaction(
    conn: &Connection,
    user_id: i64,
    kind: &str,
    description: &str,
    category: &str,
    amount: f64,
    entry_date: &str,
) -> Result<i64> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO transactions (user_id, kind, description, category, amount, entry_date)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;
    let id = stmt.insert(params![user_id, kind, description, category, amount, entry_date])?;
    Ok(id)
}

pub(crate) fn direct_insert_message(
    conn: &Connection,
    user_id: i64,
    role: &str,
    content: &str,
) -> Result<i64> {
    let mut stmt = conn
        .prepare_cached("INSERT INTO messages (user_id, role, content) VALUES (?1, ?2, ?3)")?;
    let id = stmt.insert(params![user_id, role, content])?;
    Ok(id)
}

pub(crate) fn count_user_messages(conn: &Connection, user_id: i64) -> Result<i64> {
    let mut stmt = conn.prepare_cached("SELECT COUNT(*) FROM messages WHERE user_id = ?1")?;
    let count: i64 = stmt.query_row(params![user_id], |row| row.get(0))?;
    Ok(count)
}

pub(crate) fn count_user_transactions(conn: &Connection, user_id: i64) -> Result<i64> {
    let mut stmt = conn.prepare_cached("SELECT COUNT(*) FROM transactions WHERE user_id = ?1")?;
    let count: i64 = stmt.query_row(params![user_id], |row| row.get(0))?;
    Ok(count)
}
