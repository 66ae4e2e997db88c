//! Pulls a structured transaction out of a model-generated reply.
//!
//! The assistant is prompted to answer bookkeeping messages with a fixed
//! labeled template (`💸 Tipo: ...`, `🧾 Item: ...`, `🗂️ Categoria: ...`,
//! `💰 Valor: R$ ...`). Each field has its own extractor that searches the
//! whole reply independently, so the model reordering lines does not matter;
//! what does matter is that every marker is present and well formed.
//! Extraction is all-or-nothing: the caller either gets a complete
//! [`ExtractedTransaction`] or an [`ExtractionError`], never a partial record.

use crate::models::{ExtractedTransaction, TransactionKind};
use chrono::NaiveDate;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::trace;

static KIND_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"💸 Tipo: (.+)"));
static DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"🧾 Item: (.+)"));
static CATEGORY_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"🗂️ Categoria: (.+)"));
static AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| compile(r"💰 Valor: R\$ ([\d.,]+)"));

#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("field marker patterns are fixed and valid")
}

/// The labeled fields a reply must carry before a transaction is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Kind,
    Description,
    Category,
    Amount,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Kind => "tipo",
            Self::Description => "item",
            Self::Category => "categoria",
            Self::Amount => "valor",
        };
        f.write_str(label)
    }
}

/// Why a reply did not yield a transaction.
///
/// The variants name the offending field for the log channel; callers must
/// treat every variant the same way (skip the bookkeeping side-effect) so
/// the user-visible behavior stays uniform.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("reply has no {0} marker")]
    MissingField(Field),
    #[error("kind label {0:?} is neither despesa nor receita")]
    UnknownKind(String),
    #[error("amount {0:?} is not a valid currency value")]
    InvalidAmount(String),
}

/// Extracts a transaction from `reply`, stamping it with `today`.
///
/// The date the model states in the reply is deliberately ignored: the
/// ledger records when the movement was processed, and the model is free to
/// hallucinate dates.
///
/// # Errors
///
/// Any missing marker, empty capture, unrecognized kind label, or amount
/// that fails the currency grammar fails the whole extraction.
pub fn parse_reply(
    reply: &str,
    today: NaiveDate,
) -> Result<ExtractedTransaction, ExtractionError> {
    let kind_label =
        capture(&KIND_RE, reply).ok_or(ExtractionError::MissingField(Field::Kind))?;
    let description =
        capture(&DESCRIPTION_RE, reply).ok_or(ExtractionError::MissingField(Field::Description))?;
    let category =
        capture(&CATEGORY_RE, reply).ok_or(ExtractionError::MissingField(Field::Category))?;
    let raw_amount =
        capture(&AMOUNT_RE, reply).ok_or(ExtractionError::MissingField(Field::Amount))?;

    let kind = TransactionKind::from_reply_label(kind_label)
        .ok_or_else(|| ExtractionError::UnknownKind(kind_label.to_string()))?;
    let amount = parse_amount(raw_amount)
        .ok_or_else(|| ExtractionError::InvalidAmount(raw_amount.to_string()))?;

    trace!(
        "Extracted {} {:?} / {:?}: {}",
        kind.as_str(),
        description,
        category,
        amount
    );
    Ok(ExtractedTransaction {
        kind,
        description: description.to_string(),
        category: category.to_string(),
        amount,
        entry_date: today,
    })
}

// A capture runs to end of line and is trimmed; trimmed-empty counts as the
// marker being absent.
fn capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|value| !value.is_empty())
}

/// Converts a matched currency substring to a number.
///
/// The grammar is the Brazilian one the prompt template uses: `.` as an
/// optional thousands separator, `,` as the decimal separator. So
/// `"1.234,56"` is 1234.56 and `"50"` is 50.0.
fn parse_amount(raw: &str) -> Option<f64> {
    let normalized = raw.replace('.', "").replace(',', ".");
    normalized.parse::<f64>().ok().filter(|v| *v >= 0.0)
}
