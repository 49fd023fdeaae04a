//! Human-readable messages for validation failures.
//!
//! A [`MessageTable`] is a plain value. Callers start from the Spanish
//! defaults and merge a partial [`MessageOverrides`] over them; nothing is
//! stored globally.

use serde::{Deserialize, Serialize};

use crate::error::ErrorKind;

pub const DEFAULT_REQUIRED: &str = "RUT es requerido";
pub const DEFAULT_INVALID_CHARS: &str = "RUT contiene caracteres inválidos";
pub const DEFAULT_INVALID_FORMAT: &str = "Formato de RUT inválido";
pub const DEFAULT_INVALID_CHECK_DIGIT: &str = "Dígito verificador incorrecto";

/// A fully resolved set of messages, one per failure kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageTable {
    /// Empty or missing input. Only the schema adapter reports this.
    pub required: String,
    pub invalid_chars: String,
    pub invalid_format: String,
    pub invalid_check_digit: String,
}

impl Default for MessageTable {
    fn default() -> Self {
        Self {
            required: DEFAULT_REQUIRED.to_string(),
            invalid_chars: DEFAULT_INVALID_CHARS.to_string(),
            invalid_format: DEFAULT_INVALID_FORMAT.to_string(),
            invalid_check_digit: DEFAULT_INVALID_CHECK_DIGIT.to_string(),
        }
    }
}

/// A partial message table. Unset fields fall back to the base table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MessageOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_chars: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_check_digit: Option<String>,
}

impl MessageTable {
    /// Returns a copy of `self` with every set field of `overrides` applied.
    pub fn merged(&self, overrides: &MessageOverrides) -> Self {
        let pick = |over: &Option<String>, base: &String| over.clone().unwrap_or_else(|| base.clone());
        Self {
            required: pick(&overrides.required, &self.required),
            invalid_chars: pick(&overrides.invalid_chars, &self.invalid_chars),
            invalid_format: pick(&overrides.invalid_format, &self.invalid_format),
            invalid_check_digit: pick(&overrides.invalid_check_digit, &self.invalid_check_digit),
        }
    }

    /// The message for `kind`.
    pub fn message(&self, kind: ErrorKind) -> &str {
        match kind {
            ErrorKind::InvalidChars => &self.invalid_chars,
            ErrorKind::InvalidFormat => &self.invalid_format,
            ErrorKind::InvalidCheckDigit => &self.invalid_check_digit,
        }
    }
}

/// Resolves the message for `error`, applying `overrides` over the defaults.
///
/// # Examples
///
/// ```
/// use rutkit_core::{error_message, ErrorKind, MessageOverrides};
///
/// let overrides = MessageOverrides {
///     invalid_check_digit: Some("X".into()),
///     ..Default::default()
/// };
/// assert_eq!(error_message(ErrorKind::InvalidCheckDigit, Some(&overrides)), "X");
/// assert_eq!(error_message(ErrorKind::InvalidFormat, Some(&overrides)), "Formato de RUT inválido");
/// ```
pub fn error_message(error: ErrorKind, overrides: Option<&MessageOverrides>) -> String {
    match overrides {
        Some(overrides) => MessageTable::default().merged(overrides).message(error).to_string(),
        None => MessageTable::default().message(error).to_string(),
    }
}
