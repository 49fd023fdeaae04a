use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a raw input is not a valid RUT.
///
/// `Display` renders the stable camelCase code; use
/// [`error_message`](crate::error_message) for a human-readable text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// The input contains characters outside `[0-9kK.\- ]` (strict policy only).
    #[error("invalidChars")]
    InvalidChars,
    /// Wrong shape, or wrong length once normalized.
    #[error("invalidFormat")]
    InvalidFormat,
    /// Well formed, but the check symbol does not match the body.
    #[error("invalidCheckDigit")]
    InvalidCheckDigit,
}

impl ErrorKind {
    /// All kinds, in the order the validator can produce them.
    pub const ALL: [ErrorKind; 3] = [
        ErrorKind::InvalidChars,
        ErrorKind::InvalidFormat,
        ErrorKind::InvalidCheckDigit,
    ];

    /// The camelCase code, as used in serialized output.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::InvalidChars => "invalidChars",
            ErrorKind::InvalidFormat => "invalidFormat",
            ErrorKind::InvalidCheckDigit => "invalidCheckDigit",
        }
    }

    /// True for the structural kinds (everything except a checksum mismatch).
    pub fn is_format_class(self) -> bool {
        !matches!(self, ErrorKind::InvalidCheckDigit)
    }
}
