//! Rendering of RUTs for display.

use serde::{Deserialize, Serialize};

use crate::normalize::clean;

/// How [`format`] renders a RUT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Digits and check symbol, no separators: `189726317`.
    Clean,
    /// Thousands dots and a dash: `18.972.631-7`.
    Formatted,
    /// Dash only: `18972631-7`.
    #[default]
    #[serde(alias = "default")]
    Dashed,
}

impl OutputFormat {
    /// Parses a mode name. Anything other than `clean` or `formatted`
    /// selects the dashed default.
    pub fn from_name(name: &str) -> Self {
        match name {
            "clean" => OutputFormat::Clean,
            "formatted" => OutputFormat::Formatted,
            _ => OutputFormat::Dashed,
        }
    }
}

/// Normalizes `raw` and renders it in `mode`.
///
/// No validation takes place: an arithmetically wrong RUT is rendered just
/// the same. Normalized strings shorter than two characters are returned as is.
///
/// # Examples
///
/// ```
/// use rutkit_core::{format, OutputFormat};
///
/// assert_eq!(format("189726317", OutputFormat::Dashed), "18972631-7");
/// assert_eq!(format("18.972.631-7", OutputFormat::Clean), "189726317");
/// assert_eq!(format("17779355k", OutputFormat::Formatted), "17.779.355-K");
/// ```
pub fn format(raw: &str, mode: OutputFormat) -> String {
    let cleaned = clean(raw);
    if cleaned.len() < 2 {
        return cleaned;
    }

    let (body, symbol) = cleaned.split_at(cleaned.len() - 1);
    match mode {
        OutputFormat::Clean => cleaned.clone(),
        OutputFormat::Formatted => format!("{}-{symbol}", group_thousands(body)),
        OutputFormat::Dashed => format!("{body}-{symbol}"),
    }
}

/// `format(raw, OutputFormat::Dashed)`.
pub fn format_default(raw: &str) -> String {
    format(raw, OutputFormat::default())
}

/// Inserts `.` before every position (other than the first) whose following
/// run of digits has a length that is a multiple of three.
fn group_thousands(body: &str) -> String {
    let bytes = body.as_bytes();
    let mut out = String::with_capacity(body.len() + body.len() / 3);
    let mut run_after = vec![0usize; bytes.len() + 1];
    for i in (0..bytes.len()).rev() {
        run_after[i] = if bytes[i].is_ascii_digit() { run_after[i + 1] + 1 } else { 0 };
    }

    for (i, &b) in bytes.iter().enumerate() {
        if i > 0 && run_after[i] > 0 && run_after[i] % 3 == 0 {
            out.push('.');
        }
        out.push(char::from(b));
    }
    out
}
