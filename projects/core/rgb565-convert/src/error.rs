//! Error types for batch colour conversion.

use thiserror::Error;

/// Errors that can occur when converting buffers of colours.
///
/// Converting a single colour cannot fail; only the buffer level operations return these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The input byte length is invalid (must be divisible by 4).
    #[error("Invalid input length: {0} bytes. Length must be divisible by 4 (RGBA8888 pixel size).")]
    InvalidLength(usize),

    /// The output buffer is too small for the operation.
    #[error("Output buffer too small: need {needed} colours, but only {actual} available.")]
    OutputBufferTooSmall {
        /// The required number of colours
        needed: usize,
        /// The actual number of colours
        actual: usize,
    },
}
