use crate::db::DbPool;
use crate::errors::{Error, Result};
use crate::models::{ChatMessage, ChatRole};
use rusqlite::params;
use tracing::{debug, instrument};

/// Appends one conversation turn for a user.
///
/// # Parameters
///
/// * `pool`: The database connection pool.
/// * `user_id`: The chat-platform identifier of the owning user.
/// * `role`: Who authored the turn.
/// * `content`: The turn's text, stored verbatim.
///
/// # Returns
///
/// Returns `Ok(i64)` with the ID of the newly inserted row.
///
/// # Errors
///
/// Returns `Error::Database` if the database lock cannot be acquired, or a
/// `rusqlite` error if the insert fails.
#[instrument(skip(pool, content))]
pub async fn save_message(
    pool: &DbPool,
    user_id: i64,
    role: ChatRole,
    content: &str,
) -> Result<i64> {
    let conn = pool
        .lock()
        .map_err(|_| Error::Database("Failed to acquire DB lock".to_string()))?;
    let mut stmt = conn
        .prepare_cached("INSERT INTO messages (user_id, role, content) VALUES (?1, ?2, ?3)")?;
    let message_id = stmt.insert(params![user_id, role.as_str(), content])?;
    debug!(
        "Saved {} message {} for user {}",
        role.as_str(),
        message_id,
        user_id
    );
    Ok(message_id)
}

/// Fetches the most recent `limit` turns for a user, oldest first.
///
/// The query reads newest-first with a LIMIT and the result is reversed, so
/// the caller always gets a chronological window ending at the latest turn.
///
/// # Errors
///
/// Returns `Error::Database` if the database lock cannot be acquired or a
/// stored role label is unknown, or a `rusqlite` error if the query fails.
#[instrument(skip(pool))]
pub async fn get_user_history(pool: &DbPool, user_id: i64, limit: usize) -> Result<Vec<ChatMessage>> {
    let conn = pool
        .lock()
        .map_err(|_| Error::Database("Failed to acquire DB lock".to_string()))?;
    let mut stmt = conn.prepare_cached(
        "SELECT role, content FROM messages WHERE user_id = ?1 ORDER BY id DESC LIMIT ?2",
    )?;
    let rows = stmt.query_map(params![user_id, limit as i64], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut turns = Vec::new();
    for row in rows {
        let (role_label, content) = row?;
        let role = ChatRole::parse(&role_label).ok_or_else(|| {
            Error::Database(format!(
                "Unknown role {:?} in messages for user {}",
                role_label, user_id
            ))
        })?;
        turns.push(ChatMessage { role, content });
    }
    turns.reverse();
    Ok(turns)
}
