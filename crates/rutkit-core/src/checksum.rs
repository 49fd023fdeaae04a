//! Modulo-11 check symbol computation.

use crate::normalize::clean;

/// Weights applied to the body digits, right to left, cycling every six digits.
pub const CHECK_WEIGHTS: [u32; 6] = [2, 3, 4, 5, 6, 7];

/// Computes the check symbol for a RUT body.
///
/// The input may still carry separators or its own trailing check symbol
/// (`K`); it is normalized and a trailing `K` is dropped first. Returns `None`
/// when what remains is empty or contains anything but digits.
///
/// # Examples
///
/// ```
/// use rutkit_core::check_digit;
///
/// assert_eq!(check_digit("18.972.631"), Some('7'));
/// assert_eq!(check_digit("6"), Some('K'));
/// assert_eq!(check_digit("abc"), None);
/// ```
pub fn check_digit(body: &str) -> Option<char> {
    let cleaned = clean(body);
    let digits = cleaned.strip_suffix('K').unwrap_or(&cleaned);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let sum = digits
        .bytes()
        .rev()
        .zip(CHECK_WEIGHTS.iter().cycle())
        .fold(0u32, |acc, (b, w)| (acc + u32::from(b - b'0') * w) % 11);

    Some(symbol_for(11 - sum))
}

/// Maps `11 - (sum mod 11)` to its check symbol.
fn symbol_for(remainder: u32) -> char {
    match remainder {
        11 => '0',
        10 => 'K',
        // 1..=9
        r => char::from_digit(r, 10).unwrap_or('0'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_bodies() {
        assert_eq!(check_digit("18972631"), Some('7'));
        assert_eq!(check_digit("12345678"), Some('5'));
        assert_eq!(check_digit("11111111"), Some('1'));
        assert_eq!(check_digit("12213359"), Some('1'));
    }

    #[test]
    fn test_zero_symbol() {
        assert_eq!(check_digit("12131415"), Some('0'));
    }

    #[test]
    fn test_k_symbol() {
        assert_eq!(check_digit("6"), Some('K'));
        assert_eq!(check_digit("33333335"), Some('K'));
    }

    #[test]
    fn test_formatted_input() {
        assert_eq!(check_digit("18.972.631"), Some('7'));
        assert_eq!(check_digit("0018972631"), Some('7'));
    }

    #[test]
    fn test_trailing_k_is_ignored() {
        assert_eq!(check_digit("33333335K"), Some('K'));
        assert_eq!(check_digit("6k"), Some('K'));
    }

    #[test]
    fn test_not_computable() {
        assert_eq!(check_digit(""), None);
        assert_eq!(check_digit("abc"), None);
        assert_eq!(check_digit("K"), None);
        assert_eq!(check_digit("1K2"), None);
    }

    #[test]
    fn test_weights_wrap_after_six_digits() {
        // 1234567: 7*2 + 6*3 + 5*4 + 4*5 + 3*6 + 2*7 + 1*2 = 106, 106 % 11 = 7
        assert_eq!(check_digit("1234567"), Some('4'));
        assert_eq!(check_digit("1000000"), Some('9'));
    }

    #[test]
    fn test_long_body_does_not_overflow() {
        let body = "9".repeat(10_000);
        assert!(check_digit(&body).is_some());
    }
}
