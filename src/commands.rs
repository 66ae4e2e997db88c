//! Grammar of the command-style inputs the assistant understands.
//!
//! Everything that does not parse as a command is free text and goes to the
//! language model instead.

/// A recognized user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `start` - greet and explain what the assistant does.
    Start,
    /// `resumo <período>` - period summary; the argument is resolved later
    /// by [`crate::period::resolve_period`].
    Summary(String),
    /// `total` - all-time totals per category.
    CategoryTotals,
    /// `limpar [confirmar]` - the two-step destructive purge. Without the
    /// literal confirmation token nothing is deleted.
    Purge {
        confirmed: bool,
    },
}

/// The token that arms the purge command.
pub const PURGE_CONFIRMATION_TOKEN: &str = "confirmar";

/// Parses one inbound message into a [`Command`], or `None` for free text.
///
/// A leading `/` is tolerated (chat platforms usually prefix commands with
/// one) and the command word is case-insensitive.
#[must_use]
pub fn parse_command(text: &str) -> Option<Command> {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_prefix('/').unwrap_or(trimmed);
    let (head, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (trimmed, ""),
    };

    match head.to_lowercase().as_str() {
        "start" if rest.is_empty() => Some(Command::Start),
        "resumo" => Some(Command::Summary(if rest.is_empty() {
            "hoje".to_string()
        } else {
            rest.to_string()
        })),
        "total" if rest.is_empty() => Some(Command::CategoryTotals),
        "limpar" => Some(Command::Purge {
            confirmed: rest.eq_ignore_ascii_case(PURGE_CONFIRMATION_TOKEN),
        }),
        _ => None,
    }
}
