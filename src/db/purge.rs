use crate::db::DbPool;
use crate::errors::{Error, Result};
use rusqlite::params;
use tracing::{info, instrument};

/// Row counts removed by a purge, for logging and confirmation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurgeOutcome {
    pub messages_deleted: usize,
    pub transactions_deleted: usize,
}

/// Irreversibly deletes ALL stored data for one user: conversation history
/// and ledger together, inside a single database transaction.
///
/// Either both tables are cleared or neither is; a partial purge is never
/// observable. Other users' rows are untouched.
///
/// # Errors
///
/// Returns `Error::Database` if the database lock cannot be acquired or the
/// transaction cannot be started or committed.
#[instrument(skip(pool))]
pub async fn purge_user(pool: &DbPool, user_id: i64) -> Result<PurgeOutcome> {
    let mut conn = pool
        .lock()
        .map_err(|_| Error::Database("Failed to acquire DB lock for purge".to_string()))?;

    let tx = conn
        .transaction()
        .map_err(|e| Error::Database(format!("Failed to start purge transaction: {}", e)))?;

    let messages_deleted = tx
        .execute("DELETE FROM messages WHERE user_id = ?1", params![user_id])
        .map_err(|e| {
            Error::Database(format!("Failed to purge messages for user {}: {}", user_id, e))
        })?;
    let transactions_deleted = tx
        .execute(
            "DELETE FROM transactions WHERE user_id = ?1",
            params![user_id],
        )
        .map_err(|e| {
            Error::Database(format!(
                "Failed to purge transactions for user {}: {}",
                user_id, e
            ))
        })?;

    tx.commit()
        .map_err(|e| Error::Database(format!("Failed to commit purge for user {}: {}", user_id, e)))?;

    info!(
        "Purged user {}: {} messages, {} transactions",
        user_id, messages_deleted, transactions_deleted
    );
    Ok(PurgeOutcome {
        messages_deleted,
        transactions_deleted,
    })
}
