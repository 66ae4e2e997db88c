use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Direction of a financial movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Money going out ("Despesa").
    Expense,
    /// Money coming in ("Receita").
    Income,
}

impl TransactionKind {
    /// Canonical label, used both for storage and for display.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expense => "Despesa",
            Self::Income => "Receita",
        }
    }

    /// Parses a stored label back into the enum. Exact match only.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Despesa" => Some(Self::Expense),
            "Receita" => Some(Self::Income),
            _ => None,
        }
    }

    /// Classifies the free-text `Tipo` label from a model reply.
    ///
    /// The model is prompted to answer "Despesa" or "Receita" but tends to
    /// embellish ("Despesa fixa", "receita extra"), so this matches the two
    /// keywords case-insensitively anywhere in the label.
    #[must_use]
    pub fn from_reply_label(label: &str) -> Option<Self> {
        let lowered = label.to_lowercase();
        if lowered.contains("receita") {
            Some(Self::Income)
        } else if lowered.contains("despesa") {
            Some(Self::Expense)
        } else {
            None
        }
    }
}

/// One stored financial movement. Immutable once persisted; the only way a
/// row disappears is a full user purge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub user_id: i64,
    pub kind: TransactionKind,
    pub description: String,
    pub category: String,
    /// Non-negative by construction: extraction rejects anything that does
    /// not parse as a currency value.
    pub amount: f64,
    /// Calendar date the movement was processed on (no time component).
    pub entry_date: NaiveDate,
}

/// A transaction pulled out of a model reply, not yet tied to a user or row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedTransaction {
    pub kind: TransactionKind,
    pub description: String,
    pub category: String,
    pub amount: f64,
    /// Always the processing date; any date the model states is ignored.
    pub entry_date: NaiveDate,
}

/// Author of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl ChatRole {
    /// Wire/storage label for the role column.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }

    /// Parses a stored role label.
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "system" => Some(Self::System),
            "user" => Some(Self::User),
            "assistant" => Some(Self::Assistant),
            _ => None,
        }
    }
}

/// One turn of conversation history as handed to the language model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Per-category amount totals. A `BTreeMap` so iteration (and therefore
/// every rendered report) has a stable order.
pub type CategoryTotals = BTreeMap<String, f64>;
