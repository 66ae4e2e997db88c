//! Renders query results into the user-facing chat replies.
//!
//! Pure string building: grouping and subtotals happen here, storage access
//! happens in [`crate::db`]. Empty inputs always render an explicit
//! "nothing here" message, never a blank reply.

use crate::models::{CategoryTotals, Transaction, TransactionKind};
use crate::period::DateRange;
use std::fmt::Write as _;

// `R$ 1234,56` - two decimal places, comma as the decimal separator.
fn brl(amount: f64) -> String {
    format!("{amount:.2}").replace('.', ",")
}

fn display_date(date: chrono::NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Renders the `resumo` reply for one period.
#[must_use]
pub fn format_period_summary(transactions: &[Transaction], range: &DateRange) -> String {
    let period = format!(
        "{} a {}",
        display_date(range.start),
        display_date(range.end)
    );
    if transactions.is_empty() {
        return format!("📭 Nenhuma movimentação encontrada no período {period}.");
    }

    let mut expenses = 0.0;
    let mut income = 0.0;
    let mut body = format!("📊 Resumo de {period}:\n\n");
    for tx in transactions {
        let marker = match tx.kind {
            TransactionKind::Expense => {
                expenses += tx.amount;
                "💸"
            }
            TransactionKind::Income => {
                income += tx.amount;
                "💰"
            }
        };
        let _ = writeln!(
            body,
            "{marker} {} ({}): R$ {}",
            tx.description,
            tx.category,
            brl(tx.amount)
        );
    }

    let _ = write!(
        body,
        "\n💸 Despesas: R$ {}\n💰 Receitas: R$ {}\n🧮 Saldo: R$ {}",
        brl(expenses),
        brl(income),
        brl(income - expenses)
    );
    body
}

/// Renders the `total` reply: all-time totals per category, sorted by
/// category name.
#[must_use]
pub fn format_category_totals(totals: &CategoryTotals) -> String {
    if totals.is_empty() {
        return "📭 Nenhuma movimentação registrada ainda.".to_string();
    }

    let mut body = String::from("🗂️ Total por categoria:\n\n");
    let mut grand_total = 0.0;
    for (category, amount) in totals {
        grand_total += amount;
        let _ = writeln!(body, "• {category}: R$ {}", brl(*amount));
    }
    let _ = write!(body, "\n🧮 Total geral: R$ {}", brl(grand_total));
    body
}
