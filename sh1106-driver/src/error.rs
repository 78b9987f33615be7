//! Driver error type

use sh1106_core::Error as CoreError;

/// Errors from driver operations
///
/// `E` is the bus error type. Transport failures (including bus timeouts)
/// are passed through unchanged; nothing is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Unknown section or font identifier
    InvalidArgument,
    /// Font identifier has no glyph table
    NotFound,
    /// I2C transaction failed or timed out
    Transport(E),
}

impl<E> From<CoreError> for Error<E> {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidArgument => Error::InvalidArgument,
            CoreError::NotFound => Error::NotFound,
        }
    }
}
