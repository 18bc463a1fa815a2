//! Error types for the utilkit core library.

use thiserror::Error;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the utilkit library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed human-readable size string
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] SizeError),
}

/// Reasons a size string is rejected by [`crate::byte_size::to_bytes`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SizeError {
    /// Input was the empty string
    #[error("Empty size string")]
    Empty,

    /// No unit suffix after the number
    #[error("Size string '{0}' has no unit")]
    MissingUnit(String),

    /// No number before the unit suffix
    #[error("Size string '{0}' has no number")]
    MissingNumber(String),

    /// Number part is not `digits[.digits]`
    #[error("Size string '{0}' has an invalid number")]
    InvalidNumber(String),

    /// Unit suffix is not a known decimal or binary unit
    #[error("Unknown unit '{unit}' in size string '{input}'")]
    UnknownUnit { input: String, unit: String },

    /// Value does not fit in 64 bits
    #[error("Size string '{0}' exceeds the 64-bit byte range")]
    Overflow(String),
}

impl Error {
    /// The size-parsing failure behind this error.
    pub fn size_error(&self) -> &SizeError {
        match self {
            Error::InvalidArgument(err) => err,
        }
    }
}
