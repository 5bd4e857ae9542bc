//! Error types for oxtrc

use thiserror::Error;

/// Result type for oxtrc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when validating or applying tone curves
///
/// The first three variants describe a structurally invalid profile. They are
/// not retriable: the caller is expected to abort processing of that profile.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Tag type is neither `curv` nor `para`
    #[error("Unsupported curve kind: tag type 0x{0:08X} is not a tone curve")]
    UnsupportedCurveKind(u32),

    /// Parametric function type outside the five ICC types
    #[error("Unsupported parametric curve type: {0}")]
    UnsupportedParametricType(u16),

    /// Parametric curve carries fewer parameters than its type requires
    #[error(
        "Parametric curve type {function_type} needs {expected} parameters, got {actual}"
    )]
    ParameterCount {
        function_type: u16,
        expected: usize,
        actual: usize,
    },

    /// One curve per channel is required
    #[error("Channel count mismatch: {curves} curves for {values} values")]
    ChannelCount { curves: usize, values: usize },

    /// Interleaved buffer ends in the middle of a pixel
    #[error("Buffer length {len} is not a whole number of RGB pixels")]
    PartialPixel { len: usize },

    /// Buffer size mismatch
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}
