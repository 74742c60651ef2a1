//! Error types for sample packing.

use thiserror::Error;

/// Result type for packing operations.
pub type PackResult<T> = Result<T, PackError>;

/// Errors that can occur while packing a sample stream.
#[derive(Debug, Error)]
pub enum PackError {
    /// Stereo input ended after the left byte of a pair. A clean end of
    /// stream before a pair starts is normal termination, not this error.
    #[error("stereo input stream contains an odd number of bytes")]
    OddStereoInput,

    /// I/O error from the underlying reader or writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
