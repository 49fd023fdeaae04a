use rutkit_core::{MessageTable, OutputFormat, Validator, format};

use crate::issue::{Issue, IssueCode, ParseOutcome, SchemaError};
use crate::options::SchemaOptions;

/// A reusable RUT field validator.
///
/// Parsing runs, in order: the required check, the validator stages of the
/// configured policy, then renders the normalized RUT in the configured
/// output format. The first failing check ends the parse with a single issue.
#[derive(Debug, Clone)]
pub struct RutSchema {
    messages: MessageTable,
    output_format: OutputFormat,
    validator: Validator,
}

impl Default for RutSchema {
    fn default() -> Self {
        Self::new(SchemaOptions::default())
    }
}

impl RutSchema {
    pub fn new(options: SchemaOptions) -> Self {
        Self {
            messages: MessageTable::default().merged(&options.messages),
            output_format: options.output_format,
            validator: Validator::new(options.policy),
        }
    }

    /// The resolved messages this schema reports with.
    pub fn messages(&self) -> &MessageTable {
        &self.messages
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    /// Validates `input` and returns it in the configured output format.
    pub fn parse(&self, input: &str) -> Result<String, SchemaError> {
        if input.is_empty() {
            return Err(self.fail(IssueCode::Required, self.messages.required.clone(), input));
        }

        match self.validator.validate(input) {
            Ok(normalized) => Ok(format(&normalized, self.output_format)),
            Err(kind) => {
                let message = self.messages.message(kind).to_string();
                Err(self.fail(kind.into(), message, input))
            }
        }
    }

    /// Like [`parse`](Self::parse), treating `None` as a missing value.
    pub fn parse_optional(&self, input: Option<&str>) -> Result<String, SchemaError> {
        match input {
            Some(input) => self.parse(input),
            None => Err(self.fail(IssueCode::Required, self.messages.required.clone(), "")),
        }
    }

    /// [`parse`](Self::parse), with the result folded into a [`ParseOutcome`].
    pub fn safe_parse(&self, input: &str) -> ParseOutcome {
        self.parse(input).into()
    }

    fn fail(&self, code: IssueCode, message: String, input: &str) -> SchemaError {
        log::debug!("schema issue: {code:?}");
        SchemaError::single(Issue {
            code,
            message,
            input: input.to_string(),
        })
    }
}

/// Builds a schema from `options`.
pub fn make_schema(options: SchemaOptions) -> RutSchema {
    RutSchema::new(options)
}
