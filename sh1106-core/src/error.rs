//! Core error type

/// Errors from buffer and rendering operations
///
/// Rendering is a pure in-memory mutation; it can only fail on argument
/// validation, and always fails before touching the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Unknown section or font identifier
    InvalidArgument,
    /// Font identifier is known but has no glyph table registered
    NotFound,
}
