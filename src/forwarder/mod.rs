//! Batch orchestration: build, resolve, deliver, verify.
//!
//! This module provides:
//! - The per-invocation driver ([`Forwarder`])
//! - Failure handling across records ([`FailurePolicy`])
//! - Stage-tagged errors ([`ForwardError`])

mod error;
mod handler;
mod policy;


pub use error::ForwardError;
pub use handler::Forwarder;
pub use policy::FailurePolicy;
