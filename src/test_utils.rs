#![allow(dead_code)]
//! Test doubles shared across the crate's unit tests.

use crate::model::{LanguageModel, ModelError};
use crate::models::ChatMessage;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A deterministic stand-in for the remote model: hands out scripted
/// replies in order and records every conversation window it was called
/// with.
pub(crate) struct ScriptedModel {
    replies: Mutex<VecDeque<Result<String, ModelError>>>,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl ScriptedModel {
    /// Succeeds with the given replies, one per call, in order.
    pub(crate) fn replying<const N: usize>(replies: [&'static str; N]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().map(|r| Ok((*r).to_string())).collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fails every call with the given reason.
    pub(crate) fn failing(reason: &str) -> Self {
        let mut replies = VecDeque::new();
        replies.push_back(Err(ModelError(reason.to_string())));
        Self {
            replies: Mutex::new(replies),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every conversation window `complete` has seen so far.
    pub(crate) fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().unwrap().clone()
    }
}

impl LanguageModel for ScriptedModel {
    async fn complete(&self, history: &[ChatMessage]) -> Result<String, ModelError> {
        self.calls.lock().unwrap().push(history.to_vec());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ModelError("script exhausted".to_string())))
    }
}
