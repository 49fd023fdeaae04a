//! Reduction of free-form RUT input to its canonical digit string.

/// Strips formatting from a RUT and canonicalizes it.
///
/// Every character other than an ASCII digit or `k`/`K` is treated as a
/// separator and dropped, whatever it is. `k` is upper-cased. Leading zeros
/// are removed unless the result would be empty, in which case the all-zero
/// string is kept (`"000"` stays `"000"`).
///
/// Shape is not checked here; see [`crate::validate`](mod@crate::validate) for that.
///
/// # Examples
///
/// ```
/// use rutkit_core::clean;
///
/// assert_eq!(clean("18.972.631-7"), "189726317");
/// assert_eq!(clean("12.345.678-k"), "12345678K");
/// assert_eq!(clean("0012213359-1"), "122133591");
/// assert_eq!(clean("000"), "000");
/// ```
pub fn clean(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter_map(|c| match c {
            '0'..='9' | 'K' => Some(c),
            'k' => Some('K'),
            _ => None,
        })
        .collect();

    let stripped = cleaned.trim_start_matches('0');
    if stripped.is_empty() {
        cleaned
    } else {
        stripped.to_string()
    }
}

/// Returns true if `c` can appear in a normalized RUT.
pub(crate) fn is_rut_char(c: char) -> bool {
    c.is_ascii_digit() || c == 'K'
}
