//! Staged acceptance of raw RUT input.
//!
//! A raw string goes through up to four stages; the first one that fails
//! decides the [`ErrorKind`]:
//!
//! 1. character check (strict policy only) → [`ErrorKind::InvalidChars`]
//! 2. literal shape of the raw string → [`ErrorKind::InvalidFormat`]
//! 3. canonical length of the normalized string → [`ErrorKind::InvalidFormat`]
//! 4. check symbol → [`ErrorKind::InvalidCheckDigit`]

use serde::{Deserialize, Serialize};

use crate::checksum::check_digit;
use crate::error::ErrorKind;
use crate::normalize::{clean, is_rut_char};
use crate::shape::{Policy, match_shape};

/// Body length bounds of a canonical RUT. These match the digit runs the
/// shape check accepts, so a normalized RUT always validates again.
pub const MIN_BODY_LEN: usize = 7;
pub const MAX_BODY_LEN: usize = 8;

/// Validates raw input under a fixed [`Policy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    policy: Policy,
}

impl Validator {
    pub fn new(policy: Policy) -> Self {
        Self { policy }
    }

    pub fn strict() -> Self {
        Self::new(Policy::Strict)
    }

    pub fn lenient() -> Self {
        Self::new(Policy::Lenient)
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Runs every stage and returns the normalized RUT on success.
    ///
    /// The returned string is exactly [`clean`]`(raw)`; it is not reformatted.
    pub fn validate(&self, raw: &str) -> Result<String, ErrorKind> {
        log::trace!("validating {raw:?} ({:?})", self.policy);

        if !raw.chars().all(|c| self.policy.allows_char(c)) {
            return Err(reject(ErrorKind::InvalidChars, "character"));
        }

        if match_shape(raw, self.policy).is_none() {
            return Err(reject(ErrorKind::InvalidFormat, "shape"));
        }

        let cleaned = clean(raw);
        let Some((body, symbol)) = split_canonical(&cleaned) else {
            return Err(reject(ErrorKind::InvalidFormat, "canonical length"));
        };

        if check_digit(body) != Some(symbol.to_ascii_uppercase()) {
            return Err(reject(ErrorKind::InvalidCheckDigit, "check digit"));
        }

        Ok(cleaned)
    }

    pub fn is_valid(&self, raw: &str) -> bool {
        self.validate(raw).is_ok()
    }
}

fn reject(kind: ErrorKind, stage: &str) -> ErrorKind {
    log::debug!("rejected at {stage} stage: {kind}");
    kind
}

/// Splits a normalized RUT into body and check symbol, if its body is
/// `[1-9][0-9]{6,7}` and its symbol is `[0-9K]`.
pub(crate) fn split_canonical(normalized: &str) -> Option<(&str, char)> {
    let symbol = normalized.chars().last()?;
    let body = &normalized[..normalized.len() - symbol.len_utf8()];

    let canonical_body = (MIN_BODY_LEN..=MAX_BODY_LEN).contains(&body.len())
        && !body.starts_with('0')
        && body.bytes().all(|b| b.is_ascii_digit());

    (canonical_body && is_rut_char(symbol)).then_some((body, symbol))
}

/// Validates `raw` with the strict policy.
///
/// # Examples
///
/// ```
/// use rutkit_core::{validate, ErrorKind};
///
/// assert_eq!(validate("18.972.631-7"), Ok("189726317".to_string()));
/// assert_eq!(validate("18.972.631-0"), Err(ErrorKind::InvalidCheckDigit));
/// assert_eq!(validate("18.972.631-X"), Err(ErrorKind::InvalidChars));
/// ```
pub fn validate(raw: &str) -> Result<String, ErrorKind> {
    Validator::strict().validate(raw)
}

/// `validate(raw).is_ok()`.
pub fn is_valid(raw: &str) -> bool {
    Validator::strict().is_valid(raw)
}

/// Serializable form of a validation outcome.
///
/// Renders as `{"valid":true,"rut":"..."}` or
/// `{"valid":false,"error":"invalidFormat"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rut: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorKind>,
}

impl From<Result<String, ErrorKind>> for ValidationReport {
    fn from(outcome: Result<String, ErrorKind>) -> Self {
        match outcome {
            Ok(rut) => Self {
                valid: true,
                rut: Some(rut),
                error: None,
            },
            Err(error) => Self {
                valid: false,
                rut: None,
                error: Some(error),
            },
        }
    }
}
