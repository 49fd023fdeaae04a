//! Literal shape matching of raw (un-normalized) RUT input.
//!
//! Three shapes are accepted, with `C` a check symbol (`[0-9kK]`):
//!
//! ```text
//! grouped  G1 . G2 . G3 - C     G1 = 1-2 digits, G2/G3 = 3 digits
//! dashed   D - C                D  = 7-8 digits
//! bare     D C
//! ```
//!
//! Each digit run may carry some leading zero padding on top of its length.
//! How much is decided by the [`Policy`]:
//!
//! | policy  | G1          | G2, G3      | D               |
//! |---------|-------------|-------------|-----------------|
//! | strict  | `0?\d{1,2}` | `0?\d{3}`   | `0{0,2}\d{7,8}` |
//! | lenient | `0*\d{1,2}` | `0*\d{3}`   | `0*\d{7,8}`     |
//!
//! The matcher works on bytes; any non-ASCII byte simply fails to match.

use serde::{Deserialize, Serialize};

/// Which acceptance grammar the validator applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Rejects foreign characters as `invalidChars`; bounded zero padding.
    #[default]
    Strict,
    /// No character pre-check; unbounded zero padding on every digit run.
    Lenient,
}

impl Policy {
    /// Characters the strict policy lets through to the shape check.
    pub fn allows_char(self, c: char) -> bool {
        match self {
            Policy::Strict => matches!(c, '0'..='9' | 'k' | 'K' | '.' | '-' | ' '),
            Policy::Lenient => true,
        }
    }

    fn group_padding(self) -> Option<usize> {
        match self {
            Policy::Strict => Some(1),
            Policy::Lenient => None,
        }
    }

    fn run_padding(self) -> Option<usize> {
        match self {
            Policy::Strict => Some(2),
            Policy::Lenient => None,
        }
    }
}

impl std::str::FromStr for Policy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "strict" => Ok(Policy::Strict),
            "lenient" => Ok(Policy::Lenient),
            other => Err(format!("unknown policy '{other}'")),
        }
    }
}

/// The literal shape a raw input matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Grouped,
    Dashed,
    Bare,
}

/// Returns the shape `raw` matches under `policy`, if any.
pub fn match_shape(raw: &str, policy: Policy) -> Option<Shape> {
    let bytes = raw.as_bytes();
    let (&check, head) = bytes.split_last()?;
    if !is_check_symbol(check) {
        return None;
    }

    if let Some(digits) = head.strip_suffix(b"-") {
        if let [g1, g2, g3] = split_groups(digits).as_slice() {
            let grouped = padded_run(g1, 1, 2, policy.group_padding())
                && padded_run(g2, 3, 3, policy.group_padding())
                && padded_run(g3, 3, 3, policy.group_padding());
            if grouped {
                return Some(Shape::Grouped);
            }
        }
        if padded_run(digits, 7, 8, policy.run_padding()) {
            return Some(Shape::Dashed);
        }
        return None;
    }

    padded_run(head, 7, 8, policy.run_padding()).then_some(Shape::Bare)
}

fn is_check_symbol(b: u8) -> bool {
    b.is_ascii_digit() || b == b'k' || b == b'K'
}

fn split_groups(bytes: &[u8]) -> Vec<&[u8]> {
    bytes.split(|&b| b == b'.').collect()
}

/// Matches `0{0,pad}\d{min,max}` against the whole of `run`.
///
/// `pad == None` means any number of leading zeros.
fn padded_run(run: &[u8], min: usize, max: usize, pad: Option<usize>) -> bool {
    if run.len() < min || !run.iter().all(u8::is_ascii_digit) {
        return false;
    }
    let leading_zeros = run.iter().take_while(|&&b| b == b'0').count();
    let allowed = pad.map_or(leading_zeros, |p| p.min(leading_zeros));
    run.len().saturating_sub(max) <= allowed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped_shape() {
        assert_eq!(match_shape("18.972.631-7", Policy::Strict), Some(Shape::Grouped));
        assert_eq!(match_shape("1.234.567-4", Policy::Strict), Some(Shape::Grouped));
        assert_eq!(match_shape("33.333.335-k", Policy::Strict), Some(Shape::Grouped));
    }

    #[test]
    fn test_dashed_and_bare_shapes() {
        assert_eq!(match_shape("18972631-7", Policy::Strict), Some(Shape::Dashed));
        assert_eq!(match_shape("1234567-4", Policy::Strict), Some(Shape::Dashed));
        assert_eq!(match_shape("189726317", Policy::Strict), Some(Shape::Bare));
        assert_eq!(match_shape("33333335K", Policy::Strict), Some(Shape::Bare));
    }

    #[test]
    fn test_rejects_wrong_lengths() {
        assert_eq!(match_shape("1", Policy::Strict), None);
        assert_eq!(match_shape("6-K", Policy::Strict), None);
        assert_eq!(match_shape("123456-7", Policy::Strict), None);
        assert_eq!(match_shape("123456789-0", Policy::Strict), None);
        assert_eq!(match_shape("123.18.972.631-7", Policy::Strict), None);
        assert_eq!(match_shape("189.72.631-7", Policy::Strict), None);
    }

    #[test]
    fn test_rejects_foreign_separators() {
        assert_eq!(match_shape("18,972,631-7", Policy::Strict), None);
        assert_eq!(match_shape("18 972 631 7", Policy::Strict), None);
        assert_eq!(match_shape("18972631*7", Policy::Strict), None);
        assert_eq!(match_shape("18.972.631.7", Policy::Lenient), None);
        assert_eq!(match_shape("18.972631-7", Policy::Lenient), None);
    }

    #[test]
    fn test_strict_padding_limits() {
        assert!(match_shape("0012213359-1", Policy::Strict).is_some());
        assert!(match_shape("000012213359-1", Policy::Strict).is_none());
        assert!(match_shape("01.234.567-4", Policy::Strict).is_some());
        assert!(match_shape("001.234.567-4", Policy::Strict).is_some());
        assert!(match_shape("0001.234.567-4", Policy::Strict).is_none());
        assert!(match_shape("1.0234.567-4", Policy::Strict).is_some());
        assert!(match_shape("1.00234.567-4", Policy::Strict).is_none());
    }

    #[test]
    fn test_lenient_padding_is_unbounded() {
        assert!(match_shape("000012213359-1", Policy::Lenient).is_some());
        assert!(match_shape("001.0000234.567-4", Policy::Lenient).is_some());
        assert!(match_shape("00000000189726317", Policy::Lenient).is_some());
    }

    #[test]
    fn test_padding_only_counts_zeros() {
        // nine significant digits cannot hide behind a non-zero prefix
        assert!(match_shape("1189726317", Policy::Strict).is_none());
        assert!(match_shape("1189726317", Policy::Lenient).is_none());
    }

    #[test]
    fn test_non_ascii_never_matches() {
        assert_eq!(match_shape("18.972.631-é", Policy::Lenient), None);
        assert_eq!(match_shape("１８９７２６３１７", Policy::Lenient), None);
        assert_eq!(match_shape("", Policy::Strict), None);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("strict".parse::<Policy>(), Ok(Policy::Strict));
        assert_eq!("Lenient".parse::<Policy>(), Ok(Policy::Lenient));
        assert!("loose".parse::<Policy>().is_err());
    }

    #[test]
    fn test_allows_char() {
        assert!(Policy::Strict.allows_char(' '));
        assert!(!Policy::Strict.allows_char(','));
        assert!(Policy::Lenient.allows_char(','));
    }
}
