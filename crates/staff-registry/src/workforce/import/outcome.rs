use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::workforce::catalog::UnknownPosition;
use crate::workforce::domain::EmployeeError;

/// Reason a single input line (or the whole source) was not imported.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LineRejection {
    #[error("wrong column count, expected {expected}, got {found}")]
    ColumnCount { expected: usize, found: usize },
    #[error("blank fields are not allowed")]
    BlankField,
    #[error("unknown position: {0}")]
    UnknownPosition(String),
    #[error("invalid compensation format: {0}")]
    InvalidCompensation(String),
    #[error("compensation must be positive, got: {0}")]
    NonPositiveCompensation(String),
    #[error("employee with this email already exists")]
    DuplicateEmail,
    #[error("{0}")]
    InvalidRecord(String),
    #[error("failed to read import source: {0}")]
    Read(String),
}

impl LineRejection {
    pub const fn category(&self) -> &'static str {
        match self {
            Self::ColumnCount { .. } => "column_count",
            Self::BlankField => "blank_field",
            Self::UnknownPosition(_) => "unknown_position",
            Self::InvalidCompensation(_) => "invalid_compensation",
            Self::NonPositiveCompensation(_) => "non_positive_compensation",
            Self::DuplicateEmail => "duplicate_email",
            Self::InvalidRecord(_) => "invalid_record",
            Self::Read(_) => "read_failure",
        }
    }
}

impl From<EmployeeError> for LineRejection {
    fn from(err: EmployeeError) -> Self {
        Self::InvalidRecord(err.to_string())
    }
}

impl From<UnknownPosition> for LineRejection {
    fn from(UnknownPosition(raw): UnknownPosition) -> Self {
        Self::UnknownPosition(raw)
    }
}

/// One rejected line. `line` is 1-indexed over the whole input, header included,
/// and absent when the source itself could not be read.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDiagnostic {
    pub line: Option<usize>,
    pub rejection: LineRejection,
}

impl ImportDiagnostic {
    pub(crate) fn at_line(line: usize, rejection: LineRejection) -> Self {
        Self {
            line: Some(line),
            rejection,
        }
    }

    pub fn message(&self) -> String {
        self.rejection.to_string()
    }

    pub fn category(&self) -> &'static str {
        self.rejection.category()
    }
}

impl fmt::Display for ImportDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}", self.rejection),
            None => write!(f, "{}", self.rejection),
        }
    }
}

impl Serialize for ImportDiagnostic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ImportDiagnostic", 3)?;
        state.serialize_field("line", &self.line)?;
        state.serialize_field("category", self.category())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportOutcome {
    pub imported: usize,
    pub skipped_blank: usize,
    pub diagnostics: Vec<ImportDiagnostic>,
}

impl ImportOutcome {
    pub(crate) fn read_failure(err: &std::io::Error) -> Self {
        Self {
            imported: 0,
            skipped_blank: 0,
            diagnostics: vec![ImportDiagnostic {
                line: None,
                rejection: LineRejection::Read(err.to_string()),
            }],
        }
    }

    pub fn rejected(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
