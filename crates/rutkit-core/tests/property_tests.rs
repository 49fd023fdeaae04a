//! Property-based tests for `rutkit-core`.
//!
//! Exercises the pipeline with arbitrary strings (including non-ASCII and
//! control characters) and with generated well-formed RUTs.

use proptest::prelude::*;
use rutkit_core::{
    ErrorKind, OutputFormat, Policy, Rut, Validator, check_digit, clean, format, validate,
};

// ── Strategies ──────────────────────────────────────────────────────────────

/// A body in the range real RUTs use, with its correct check symbol.
fn arb_valid_rut() -> impl Strategy<Value = (u32, char)> {
    (1_000_000u32..=99_999_999).prop_map(|n| {
        let symbol = check_digit(&n.to_string()).expect("numeric body");
        (n, symbol)
    })
}

/// Renders a body/symbol pair in one of the shapes the strict policy accepts.
fn arb_presentation() -> impl Strategy<Value = (u32, char, String)> {
    (arb_valid_rut(), 0usize..3, any::<bool>()).prop_map(|((n, symbol), shape, lower)| {
        let symbol_text = if lower {
            symbol.to_ascii_lowercase().to_string()
        } else {
            symbol.to_string()
        };
        let raw = format!("{n}{symbol_text}");
        let text = match shape {
            0 => format(&raw, OutputFormat::Formatted),
            1 => format(&raw, OutputFormat::Dashed),
            _ => format(&raw, OutputFormat::Clean),
        };
        // keep the caller's casing to exercise case-insensitive input
        let text = if lower { text.to_ascii_lowercase() } else { text };
        (n, symbol, text)
    })
}

// ── Property tests ───────────────────────────────────────────────────────────

proptest! {
    /// Normalizing twice is the same as normalizing once.
    #[test]
    fn clean_is_idempotent(s in any::<String>()) {
        let once = clean(&s);
        prop_assert_eq!(clean(&once), once);
    }

    /// Normalized output only ever holds digits and an upper-case K.
    #[test]
    fn clean_output_alphabet(s in any::<String>()) {
        prop_assert!(clean(&s).chars().all(|c| c.is_ascii_digit() || c == 'K'));
    }

    /// No operation panics, whatever the input.
    #[test]
    fn pipeline_is_total(s in any::<String>()) {
        let _ = check_digit(&s);
        let _ = Validator::strict().validate(&s);
        let _ = Validator::lenient().validate(&s);
        for mode in [OutputFormat::Clean, OutputFormat::Formatted, OutputFormat::Dashed] {
            let _ = format(&s, mode);
        }
    }

    /// A valid input validates to its normalized form, and that form is a fixed point.
    #[test]
    fn validation_is_a_fixed_point(s in any::<String>()) {
        for policy in [Policy::Strict, Policy::Lenient] {
            let validator = Validator::new(policy);
            if let Ok(rut) = validator.validate(&s) {
                prop_assert_eq!(&rut, &clean(&s));
                prop_assert_eq!(validator.validate(&rut), Ok(rut.clone()));
            }
        }
    }

    /// Every generated well-formed RUT is accepted, in any accepted shape.
    #[test]
    fn well_formed_ruts_validate((n, symbol, text) in arb_presentation()) {
        let expected = format!("{n}{symbol}");
        prop_assert_eq!(validate(&text), Ok(expected));
    }

    /// Changing the check symbol always yields a checksum error.
    #[test]
    fn wrong_symbol_is_rejected(
        (n, symbol) in arb_valid_rut(),
        other in prop::sample::select(vec!['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'K']),
    ) {
        prop_assume!(other != symbol);
        let raw = format!("{n}-{other}");
        prop_assert_eq!(validate(&raw), Err(ErrorKind::InvalidCheckDigit));
    }

    /// The check symbol depends only on the digit sequence, not on separators.
    #[test]
    fn check_digit_ignores_formatting((n, _) in arb_valid_rut()) {
        let plain = n.to_string();
        let dotted = format(&format!("{plain}0"), OutputFormat::Formatted);
        let dotted_body = dotted.trim_end_matches("-0");
        prop_assert_eq!(check_digit(&plain), check_digit(dotted_body));
    }

    /// Formatting then re-normalizing gives back the normalized input.
    #[test]
    fn format_preserves_clean_form(s in "[0-9kK.\\- ]{0,20}") {
        for mode in [OutputFormat::Clean, OutputFormat::Formatted, OutputFormat::Dashed] {
            prop_assert_eq!(clean(&format(&s, mode)), clean(&s));
        }
    }

    /// A validated `Rut` renders back to something that validates to itself.
    #[test]
    fn rut_display_roundtrip((_, _, text) in arb_presentation()) {
        let rut = Rut::parse(&text).expect("generated RUT is valid");
        let again: Rut = rut.to_string().parse().expect("display form is valid");
        prop_assert_eq!(again, rut);
    }
}
