use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Error types for `stralgo` operations.
///
/// All conditions are local and recoverable; they are returned to the
/// immediate caller and never abort the process.
#[derive(Error, Debug)]
pub enum Error {
    /// A structurally invalid input was passed where text is required
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of what made the input invalid
        reason: &'static str,
    },
    /// A requested length or index exceeds an operand's actual content
    #[error("Out of bounds: requested {requested}, but only {available} available")]
    OutOfBounds {
        /// Length or index that was requested
        requested: usize,
        /// Content actually available
        available: usize,
    },
    /// Destination capacity was exhausted during a copy, concat or append
    #[error("Buffer full: writing {requested} more bytes exceeds capacity {capacity}")]
    BufferFull {
        /// Number of bytes the operation needed to write
        requested: usize,
        /// Total capacity of the destination buffer
        capacity: usize,
    },
    /// Dynamic growth of an internal sequence could not acquire memory
    #[error("Allocation failure: could not reserve {requested} additional elements")]
    AllocationFailure {
        /// Number of elements the growth step asked for
        requested: usize,
    },
    /// An output sink write failed
    #[error("Sink error: {0}")]
    Io(#[from] std::io::Error),
}
