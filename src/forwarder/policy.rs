//! Failure policy for records within one batch.

use std::fmt;

/// How the forwarder treats a record that fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failing record and fail the invocation.
    ///
    /// SQS then redelivers the whole batch, including records that were
    /// already delivered.
    #[default]
    AbortBatch,

    /// Continue past failing records and list them in the partial-batch
    /// response so that SQS redelivers only those.
    ///
    /// Requires `ReportBatchItemFailures` on the event source mapping.
    /// Resolution failures still abort, since they affect every record.
    ReportItemFailures,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AbortBatch => write!(f, "abort-batch"),
            Self::ReportItemFailures => write!(f, "report-item-failures"),
        }
    }
}
