//! # rutkit-schema
//!
//! Schema-style validation of a RUT field, built on [`rutkit_core`].
//!
//! A [`RutSchema`] bundles the checks a form or API field needs:
//!
//! 1. **required** - empty or missing input is rejected first
//! 2. **validation** - the core validator stages, under a configurable [`Policy`]
//! 3. **output** - the accepted RUT is rendered in the configured [`OutputFormat`]
//!
//! Every failure carries a human-readable message from a [`MessageTable`]
//! (Spanish by default, overridable per field).
//!
//! ## Examples
//!
//! ```
//! use rutkit_schema::{RutSchema, SchemaOptions};
//! use rutkit_core::OutputFormat;
//!
//! let schema = RutSchema::default();
//! assert_eq!(schema.parse("189726317").unwrap(), "18972631-7");
//!
//! let err = schema.parse("18.972.631-0").unwrap_err();
//! assert_eq!(err.issues[0].message, "Dígito verificador incorrecto");
//!
//! let formatted = RutSchema::new(
//!     SchemaOptions::default().with_output_format(OutputFormat::Formatted),
//! );
//! assert_eq!(formatted.parse("189726317").unwrap(), "18.972.631-7");
//! ```
//!
//! [`Policy`]: rutkit_core::Policy
//! [`OutputFormat`]: rutkit_core::OutputFormat
//! [`MessageTable`]: rutkit_core::MessageTable

mod issue;
mod options;
mod schema;

pub use issue::{Issue, IssueCode, ParseOutcome, SchemaError};
pub use options::{ConfigError, SchemaOptions};
pub use schema::{RutSchema, make_schema};
