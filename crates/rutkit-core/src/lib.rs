//! # rutkit-core
//!
//! Normalization, check-digit validation and formatting of Chilean national
//! identification numbers (RUT).
//!
//! ## Overview
//!
//! A RUT is a numeric body followed by one check symbol (`0`-`9` or `K`)
//! computed with a modulo-11 weighted checksum. Users type them in many ways:
//! `18.972.631-7`, `18972631-7`, `189726317`, `18972631-k`, sometimes with
//! leading zeros. This crate turns that input into something a program can
//! trust.
//!
//! ## Pipeline
//!
//! ```text
//!                 ┌──────────────┐
//!   raw &str ───► │  normalize   │ ───► "189726317"
//!                 └──────────────┘
//!                        │
//!          ┌─────────────┴─────────────┐
//!          ▼                           ▼
//!   ┌─────────────┐             ┌─────────────┐
//!   │  validate   │──checksum──►│   Result    │   Ok("189726317") / Err(ErrorKind)
//!   └─────────────┘             └─────────────┘
//!   ┌─────────────┐
//!   │   format    │ ───► "18.972.631-7" / "18972631-7" / "189726317"
//!   └─────────────┘
//! ```
//!
//! - [`normalize`] - strips separators, upper-cases `k`, drops leading zeros
//! - [`checksum`] - computes the check symbol of a body
//! - [`validate`](mod@validate) - character, shape, canonical length and checksum stages
//! - [`format`](mod@format) - renders a RUT in one of the [`OutputFormat`]s
//! - [`messages`] - Spanish default messages with caller overrides
//!
//! Every function is pure and total: any `&str`, including empty or
//! non-ASCII input, yields a value and never panics.
//!
//! ## Examples
//!
//! ```
//! use rutkit_core::{check_digit, clean, format, validate, ErrorKind, OutputFormat};
//!
//! assert_eq!(clean("18.972.631-7"), "189726317");
//! assert_eq!(check_digit("18972631"), Some('7'));
//! assert_eq!(validate("18.972.631-7"), Ok("189726317".to_string()));
//! assert_eq!(validate("18.972.631-0"), Err(ErrorKind::InvalidCheckDigit));
//! assert_eq!(format("189726317", OutputFormat::Formatted), "18.972.631-7");
//! ```
//!
//! ### Validated values
//!
//! ```
//! use rutkit_core::Rut;
//!
//! let rut: Rut = "33.333.335-k".parse()?;
//! assert_eq!(rut.as_str(), "33333335K");
//! assert_eq!(rut.to_string(), "33.333.335-K");
//! # Ok::<(), rutkit_core::ErrorKind>(())
//! ```
//!
//! ### Policies
//!
//! The default [`Policy::Strict`] rejects foreign characters with
//! [`ErrorKind::InvalidChars`] and bounds leading zero padding.
//! [`Policy::Lenient`] accepts any amount of padding and reports every
//! structural problem as [`ErrorKind::InvalidFormat`].
//!
//! ```
//! use rutkit_core::{ErrorKind, Validator};
//!
//! assert_eq!(Validator::strict().validate("18,972,631-7"), Err(ErrorKind::InvalidChars));
//! assert_eq!(Validator::lenient().validate("18,972,631-7"), Err(ErrorKind::InvalidFormat));
//! ```

/// Modulo-11 check symbol computation.
pub mod checksum;
mod error;
/// Display rendering.
pub mod format;
pub mod messages;
/// Canonicalization of raw input.
pub mod normalize;
mod rut;
pub mod shape;
pub mod validate;


pub use checksum::check_digit;
pub use error::ErrorKind;
pub use format::{OutputFormat, format};
pub use messages::{MessageOverrides, MessageTable, error_message};
pub use normalize::clean;
pub use rut::Rut;
pub use shape::Policy;
pub use validate::{ValidationReport, Validator, is_valid, validate};
