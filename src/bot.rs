//! The conversation orchestrator.
//!
//! One inbound chat event becomes one pass through [`Assistant::handle_update`]:
//! commands are routed straight to the store and formatters, free text goes
//! through the model-call-then-extract flow the assistant is built around.
//! The transport layer delivering messages is not this crate's concern; it
//! just calls `handle_update` and sends the returned string back to the user.

use crate::commands::{Command, parse_command};
use crate::config::AppConfig;
use crate::db::{self, DbPool};
use crate::errors::Result;
use crate::extract;
use crate::model::LanguageModel;
use crate::models::{ChatMessage, ChatRole};
use crate::period::{PeriodError, resolve_period};
use crate::report;
use chrono::{Local, NaiveDate};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Reply to `start`.
pub const GREETING: &str = "Olá! 👋 Sou seu assistente financeiro pessoal.\n\
Me envie uma movimentação como \"Mercado 120\" ou \"Ganhei 500\", ou pergunte algo sobre finanças!\n\
Comandos: resumo <hoje|semana|mes|dd/mm/aaaa a dd/mm/aaaa> · total · limpar";

/// Guidance when the period keyword is not recognized.
pub const PERIOD_USAGE: &str =
    "🤔 Período não reconhecido. Use: resumo hoje, resumo semana, resumo mes ou resumo dd/mm/aaaa a dd/mm/aaaa.";

/// Guidance when an explicit range has unparseable dates.
pub const RANGE_USAGE: &str =
    "🤔 Datas inválidas. Use o formato dd/mm/aaaa a dd/mm/aaaa (ex: 01/05/2025 a 15/05/2025).";

/// Warning for a purge attempt without the confirmation token.
pub const PURGE_WARNING: &str = "⚠️ Isso apaga todo o seu histórico de conversa e todas as suas movimentações, sem volta.\n\
Envie \"limpar confirmar\" para prosseguir.";

/// Confirmation after a completed purge.
pub const PURGE_DONE: &str = "🗑️ Todos os seus dados foram apagados.";

/// Generic failure reply; wraps anything the flow could not recover from.
pub const GENERIC_ERROR: &str = "❌ Ocorreu um erro ao processar sua mensagem. Tente novamente.";

/// Ties the store, the configuration, and a language model together and
/// answers inbound messages.
pub struct Assistant<M> {
    config: Arc<AppConfig>,
    pool: DbPool,
    model: M,
}

impl<M: LanguageModel> Assistant<M> {
    /// Builds an assistant over an initialized database pool.
    pub fn new(config: Arc<AppConfig>, pool: DbPool, model: M) -> Self {
        Self {
            config,
            pool,
            model,
        }
    }

    /// Handles one inbound message and always produces a reply.
    ///
    /// Infrastructure failures are logged and collapsed into the generic
    /// error reply; the process keeps serving.
    pub async fn handle_update(&self, user_id: i64, text: &str) -> String {
        let today = Local::now().date_naive();
        match self.respond(user_id, text, today).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("Failed to process update for user {}: {}", user_id, e);
                GENERIC_ERROR.to_string()
            }
        }
    }

    /// Same as [`Assistant::handle_update`] but with the processing date
    /// injected, which is also the seam the tests use.
    ///
    /// # Errors
    ///
    /// Propagates storage failures; expected conditions (bad period, failed
    /// model call, reply without a transaction) are already folded into the
    /// reply text.
    #[instrument(skip(self, text))]
    pub async fn respond(&self, user_id: i64, text: &str, today: NaiveDate) -> Result<String> {
        match parse_command(text) {
            Some(Command::Start) => Ok(GREETING.to_string()),
            Some(Command::Summary(expr)) => self.period_summary(user_id, &expr, today).await,
            Some(Command::CategoryTotals) => self.category_totals(user_id).await,
            Some(Command::Purge { confirmed }) => self.purge(user_id, confirmed).await,
            None => self.chat(user_id, text, today).await,
        }
    }

    async fn period_summary(&self, user_id: i64, expr: &str, today: NaiveDate) -> Result<String> {
        let range = match resolve_period(expr, today) {
            Ok(range) => range,
            Err(e @ PeriodError::Unrecognized(_)) => {
                debug!("Summary rejected for user {}: {}", user_id, e);
                return Ok(PERIOD_USAGE.to_string());
            }
            Err(e @ PeriodError::MalformedRange(_)) => {
                debug!("Summary rejected for user {}: {}", user_id, e);
                return Ok(RANGE_USAGE.to_string());
            }
        };
        let transactions = db::query_by_period(&self.pool, user_id, &range).await?;
        Ok(report::format_period_summary(&transactions, &range))
    }

    async fn category_totals(&self, user_id: i64) -> Result<String> {
        let totals = db::aggregate_by_category(&self.pool, user_id).await?;
        Ok(report::format_category_totals(&totals))
    }

    async fn purge(&self, user_id: i64, confirmed: bool) -> Result<String> {
        if !confirmed {
            info!("Unconfirmed purge request from user {}; nothing deleted", user_id);
            return Ok(PURGE_WARNING.to_string());
        }
        db::purge_user(&self.pool, user_id).await?;
        Ok(PURGE_DONE.to_string())
    }

    // The free-text flow: store the user turn, build the context window,
    // call the model, store its reply, then try to book a transaction out
    // of that reply.
    async fn chat(&self, user_id: i64, text: &str, today: NaiveDate) -> Result<String> {
        db::save_message(&self.pool, user_id, ChatRole::User, text).await?;

        let mut history =
            db::get_user_history(&self.pool, user_id, self.config.max_history).await?;
        history.insert(
            0,
            ChatMessage {
                role: ChatRole::System,
                content: self.config.system_prompt.clone(),
            },
        );

        let reply = match self.model.complete(&history).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("Language model call failed for user {}: {}", user_id, e);
                return Ok(GENERIC_ERROR.to_string());
            }
        };

        db::save_message(&self.pool, user_id, ChatRole::Assistant, &reply).await?;

        // Bookkeeping is best-effort: a reply without the labeled template
        // is ordinary conversation, so the reply goes out either way.
        match extract::parse_reply(&reply, today) {
            Ok(extracted) => {
                let tx_id = db::save_transaction(&self.pool, user_id, &extracted).await?;
                info!("Booked transaction {} for user {}", tx_id, user_id);
            }
            Err(e) => debug!("No transaction booked for user {}: {}", user_id, e),
        }

        Ok(reply)
    }
}
