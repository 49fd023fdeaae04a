use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ErrorKind;
use crate::format::{OutputFormat, format};
use crate::validate::Validator;

/// A RUT that passed validation, held in normalized form.
///
/// The only ways to build one go through the [`Validator`], so a `Rut` value
/// is always well formed and carries a matching check symbol. It serializes
/// as its normalized string and deserializes by validating (strict policy).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rut(String);

impl Rut {
    /// Validates `raw` with the strict policy.
    pub fn parse(raw: &str) -> Result<Self, ErrorKind> {
        Self::parse_with(raw, &Validator::strict())
    }

    pub fn parse_with(raw: &str, validator: &Validator) -> Result<Self, ErrorKind> {
        validator.validate(raw).map(Rut)
    }

    /// The normalized form, e.g. `189726317`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything but the check symbol.
    pub fn body(&self) -> &str {
        &self.0[..self.0.len() - 1]
    }

    pub fn check_symbol(&self) -> char {
        // normalized RUTs are ASCII and at least two chars long
        char::from(self.0.as_bytes()[self.0.len() - 1])
    }

    /// The body as a number.
    pub fn number(&self) -> u32 {
        self.body()
            .bytes()
            .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
    }

    pub fn format(&self, mode: OutputFormat) -> String {
        format(&self.0, mode)
    }
}

impl fmt::Display for Rut {
    /// Writes the dotted form, `18.972.631-7`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(OutputFormat::Formatted))
    }
}

impl FromStr for Rut {
    type Err = ErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Rut {
    type Error = ErrorKind;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Rut> for String {
    fn from(rut: Rut) -> Self {
        rut.0
    }
}

impl AsRef<str> for Rut {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
