//! `LedgerBot` - the core of a conversational finance-tracking assistant
//!
//! This crate implements the extraction and reporting pipeline behind a chat
//! assistant that turns free-text money talk ("Mercado 120", "Ganhei 500")
//! into a per-user ledger: the deterministic parser that pulls a structured
//! transaction out of a model-generated reply, the period grammar behind
//! summary reports, the append-only SQLite-backed store, and the orchestrator
//! that ties them together. The chat transport and the remote language-model
//! call stay outside; the latter is reached through the [`model::LanguageModel`]
//! trait.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    unsafe_code,
    unsafe_op_in_unsafe_fn,
    unreachable_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,
    clippy::all,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,
    future_incompatible,
    rust_2018_idioms,
)]
#![allow(clippy::module_name_repetitions)]

/// Conversation orchestrator - command routing and the chat/extraction flow
pub mod bot;
/// User command grammar (`start`, `resumo`, `total`, `limpar`)
pub mod commands;
/// TOML-backed application configuration
pub mod config;
/// SQLite persistence - conversation history and the transaction ledger
pub mod db;
/// Unified infrastructure error type and result handling
pub mod errors;
/// Labeled-field transaction extraction from model replies
pub mod extract;
/// The remote language model seam
pub mod model;
/// Data model shared across the crate
pub mod models;
/// Period expression resolution into concrete date ranges
pub mod period;
/// User-facing summary and totals rendering
pub mod report;

#[cfg(test)]
pub(crate) mod test_utils;

pub use errors::{Error, Result};
