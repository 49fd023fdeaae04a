#![no_main]
use libfuzzer_sys::fuzz_target;
use rutkit_core::{OutputFormat, Validator, check_digit, clean, format};

fuzz_target!(|data: &[u8]| {
    // Lossy conversion keeps inputs that are "almost" text in play.
    let s = String::from_utf8_lossy(data);

    let cleaned = clean(&s);
    assert_eq!(clean(&cleaned), cleaned);
    let _ = check_digit(&s);

    for validator in [Validator::strict(), Validator::lenient()] {
        if let Ok(rut) = validator.validate(&s) {
            assert_eq!(rut, cleaned);
            assert_eq!(validator.validate(&rut), Ok(rut.clone()));
        }
    }

    for mode in [OutputFormat::Clean, OutputFormat::Formatted, OutputFormat::Dashed] {
        let _ = format(&s, mode);
    }
});
