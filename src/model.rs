//! The seam to the remote language model.
//!
//! The actual HTTP client lives with whoever embeds this crate; everything
//! here only needs "conversation in, reply text out, may fail".

use crate::models::ChatMessage;
use std::future::Future;
use thiserror::Error;

/// Generic remote-call failure. Timeouts, non-2xx statuses, and malformed
/// response bodies all collapse into this one value; the orchestrator turns
/// it into a user-facing error message, and no retry is attempted.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("remote model call failed: {0}")]
pub struct ModelError(pub String);

/// A remote conversational model.
///
/// `history` is the chronological conversation window, system instruction
/// first. Implementations own their transport concerns (endpoint, auth,
/// timeout); the core never blocks on anything but this call.
pub trait LanguageModel {
    /// Produces the assistant reply for the given conversation.
    fn complete(
        &self,
        history: &[ChatMessage],
    ) -> impl Future<Output = Result<String, ModelError>> + Send;
}
