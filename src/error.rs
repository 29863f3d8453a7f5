//! Error types for taskbook.

use thiserror::Error;

/// Everything the core can fail with. All variants are reported to the
/// caller and never terminate the process.
#[derive(Debug, Error)]
pub enum TaskbookError {
    /// The store already holds its maximum number of tasks.
    #[error("task list is full ({0} tasks)")]
    CapacityExceeded(usize),

    /// An index outside `[1, count]` was given to an indexed operation.
    #[error("no task at position {0}")]
    NotFound(usize),

    /// The task file could not be read or written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for taskbook operations.
pub type Result<T> = std::result::Result<T, TaskbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_exceeded_display() {
        let err = TaskbookError::CapacityExceeded(100);
        assert_eq!(err.to_string(), "task list is full (100 tasks)");
    }

    #[test]
    fn not_found_display() {
        let err = TaskbookError::NotFound(7);
        assert_eq!(err.to_string(), "no task at position 7");
    }

    #[test]
    fn io_error_wraps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = TaskbookError::from(io);
        assert!(err.to_string().starts_with("io error:"));
    }
}
