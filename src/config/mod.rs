//! Configuration layer for the notifier.
//!
//! This module provides:
//! - CLI argument parsing with environment fallbacks ([`Cli`], [`Command`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Default values ([`defaults`])
//!
//! # Sources
//!
//! Every option can be given as a command-line flag or as an environment
//! variable. In Lambda only the environment is available, so deployments set
//! `WEBHOOK_SECRET_NAME` and, optionally, the other variables listed on
//! [`Cli`]. An explicit flag wins over the environment; built-in defaults
//! apply when neither is set.
//!
//! # Boolean Flag Semantics
//!
//! `--dry-run` and `--verbose` only enable. The environment accepts
//! `true`/`false` style literals (`DRY_RUN=false` leaves dry-run off).

mod cli;
pub mod defaults;
mod error;
mod validated;


pub use cli::{Cli, Command, FailurePolicyArg, MessageFormatArg, SecretSourceArg};
pub use error::{ConfigError, field};
pub use validated::ValidatedConfig;
