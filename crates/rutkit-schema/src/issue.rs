use serde::{Deserialize, Serialize};
use thiserror::Error;

use rutkit_core::ErrorKind;

/// Which check produced an [`Issue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IssueCode {
    /// The input was missing or empty.
    Required,
    InvalidChars,
    InvalidFormat,
    InvalidCheckDigit,
}

impl From<ErrorKind> for IssueCode {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::InvalidChars => IssueCode::InvalidChars,
            ErrorKind::InvalidFormat => IssueCode::InvalidFormat,
            ErrorKind::InvalidCheckDigit => IssueCode::InvalidCheckDigit,
        }
    }
}

/// One reported problem with a parsed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub code: IssueCode,
    pub message: String,
    /// The value the failing check looked at.
    pub input: String,
}

/// A rejected value. Parsing stops at the first failing check, so `issues`
/// holds exactly one entry when produced by [`RutSchema`](crate::RutSchema).
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{}", first_message(.issues))]
pub struct SchemaError {
    pub issues: Vec<Issue>,
}

fn first_message(issues: &[Issue]) -> &str {
    issues.first().map_or("", |issue| issue.message.as_str())
}

impl SchemaError {
    pub fn single(issue: Issue) -> Self {
        Self {
            issues: vec![issue],
        }
    }

    /// The code of the first issue, if any.
    pub fn code(&self) -> Option<IssueCode> {
        self.issues.first().map(|issue| issue.code)
    }
}

/// Result envelope for callers that want `success`/`data`/`issues` as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<Issue>,
}

impl From<Result<String, SchemaError>> for ParseOutcome {
    fn from(result: Result<String, SchemaError>) -> Self {
        match result {
            Ok(data) => Self {
                success: true,
                data: Some(data),
                issues: Vec::new(),
            },
            Err(err) => Self {
                success: false,
                data: None,
                issues: err.issues,
            },
        }
    }
}
