use thiserror::Error;

/// Errors surfaced by [`GridCollection`](crate::GridCollection).
///
/// Only index queries can fail. An `OutOfRange` means the host asked about a
/// position it was never told exists; it is a caller bug, not a runtime condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("index {index} out of range for grid of {count} items")]
    OutOfRange { index: usize, count: usize },
}
