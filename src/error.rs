// Error types for record loading

use thiserror::Error;

/// Why a batch of records was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("Invalid input in {record} #{index}: {field} {reason}")]
    InvalidInput {
        record: &'static str,
        index: usize,
        field: &'static str,
        reason: String,
    },

    #[error("Duplicate project id {id} at #{index}")]
    DuplicateId { id: u64, index: usize },
}
