use crate::db::DbPool;
use crate::errors::{Error, Result};
use crate::models::{CategoryTotals, ExtractedTransaction, Transaction, TransactionKind};
use crate::period::DateRange;
use chrono::NaiveDate;
use rusqlite::params;
use tracing::{debug, info, instrument};

/// Persists one extracted transaction for a user.
///
/// The ledger is append-only: there is no update path, and rows only leave
/// through [`crate::db::purge_user`].
///
/// # Parameters
///
/// * `pool`: The database connection pool.
/// * `user_id`: The chat-platform identifier of the owning user.
/// * `extracted`: The parser output to persist.
///
/// # Returns
///
/// Returns `Ok(i64)` with the ID of the newly inserted row.
///
/// # Errors
///
/// Returns `Error::Database` if the database lock cannot be acquired, or a
/// `rusqlite` error if the insert fails.
#[instrument(skip(pool, extracted))]
pub async fn save_transaction(
    pool: &DbPool,
    user_id: i64,
    extracted: &ExtractedTransaction,
) -> Result<i64> {
    let conn = pool
        .lock()
        .map_err(|_| Error::Database("Failed to acquire DB lock".to_string()))?;
    let mut stmt = conn.prepare_cached(
        "INSERT INTO transactions (user_id, kind, description, category, amount, entry_date)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;
    let transaction_id = stmt.insert(params![
        user_id,
        extracted.kind.as_str(),
        extracted.description,
        extracted.category,
        extracted.amount,
        extracted.entry_date,
    ])?;
    info!(
        "Created transaction {} for user {}: kind='{}', category='{}', amount={}",
        transaction_id,
        user_id,
        extracted.kind.as_str(),
        extracted.category,
        extracted.amount
    );
    Ok(transaction_id)
}

/// Returns a user's transactions with `entry_date` in the inclusive range,
/// in ascending insertion order.
///
/// An inverted range (`start > end`) matches nothing and yields an empty
/// vector, never an error.
///
/// # Errors
///
/// Returns `Error::Database` if the database lock cannot be acquired or a
/// stored kind label is unknown, or a `rusqlite` error if the query fails.
#[instrument(skip(pool))]
pub async fn query_by_period(
    pool: &DbPool,
    user_id: i64,
    range: &DateRange,
) -> Result<Vec<Transaction>> {
    let conn = pool
        .lock()
        .map_err(|_| Error::Database("Failed to acquire DB lock".to_string()))?;
    let mut stmt = conn.prepare_cached(
        "SELECT id, kind, description, category, amount, entry_date FROM transactions
         WHERE user_id = ?1 AND entry_date >= ?2 AND entry_date <= ?3
         ORDER BY id ASC",
    )?;
    let rows = stmt.query_map(params![user_id, range.start, range.end], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, f64>(4)?,
            row.get::<_, NaiveDate>(5)?,
        ))
    })?;

    let mut transactions = Vec::new();
    for row in rows {
        let (id, kind_label, description, category, amount, entry_date) = row?;
        transactions.push(Transaction {
            id,
            user_id,
            kind: parse_kind(&kind_label, id)?,
            description,
            category,
            amount,
            entry_date,
        });
    }
    debug!(
        "Period query for user {} [{} .. {}] matched {} transactions",
        user_id,
        range.start,
        range.end,
        transactions.len()
    );
    Ok(transactions)
}

/// Sums a user's amounts per category over the whole ledger, no period
/// filter, expenses and income combined.
///
/// Rows are folded in ascending id order into a `BTreeMap`, so repeated
/// calls over unchanged data produce bit-identical totals.
///
/// # Errors
///
/// Returns `Error::Database` if the database lock cannot be acquired, or a
/// `rusqlite` error if the query fails.
#[instrument(skip(pool))]
pub async fn aggregate_by_category(pool: &DbPool, user_id: i64) -> Result<CategoryTotals> {
    let conn = pool
        .lock()
        .map_err(|_| Error::Database("Failed to acquire DB lock".to_string()))?;
    let mut stmt = conn.prepare_cached(
        "SELECT category, amount FROM transactions WHERE user_id = ?1 ORDER BY id ASC",
    )?;
    let rows = stmt.query_map(params![user_id], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?))
    })?;

    let mut totals = CategoryTotals::new();
    for row in rows {
        let (category, amount) = row?;
        *totals.entry(category).or_insert(0.0) += amount;
    }
    debug!(
        "Aggregated {} categories for user {}",
        totals.len(),
        user_id
    );
    Ok(totals)
}

fn parse_kind(label: &str, row_id: i64) -> Result<TransactionKind> {
    TransactionKind::parse(label).ok_or_else(|| {
        Error::Database(format!(
            "Unknown transaction kind {:?} in row {}",
            label, row_id
        ))
    })
}
