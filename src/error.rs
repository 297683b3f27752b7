//! Error types with actionable diagnostics.
//!
//! Every message names the offending value and ends with a hint line so the
//! caller can fix the input without reading the source.

use std::num::ParseIntError;
use thiserror::Error;

/// Result type alias for tally operations.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Errors raised while configuring, parsing or rendering a tally.
///
/// Arithmetic edge cases (zero denominators) are not errors: they resolve to
/// `0.0`, or to `NaN` when the tally is empty.
#[derive(Error, Debug)]
pub enum TallyError {
    /// Decimal places outside the accepted range.
    #[error("Invalid decimal places: {value} (must be in 1..=100)\n  → Use a value like 3")]
    InvalidDecimalPlaces { value: usize },

    /// A text table could not be read back into a tally.
    #[error("Wrong input format at line {line}: {message}\n  → Expect a header of labels followed by `<gold> <count> <count> ...` rows")]
    Format {
        line: usize,
        message: String,
        #[source]
        source: Option<ParseIntError>,
    },
}

impl TallyError {
    /// Create a format error without an underlying cause.
    pub fn format(line: usize, message: impl Into<String>) -> Self {
        Self::Format { line, message: message.into(), source: None }
    }

    /// Create a format error caused by an unreadable cell value.
    pub fn invalid_cell(line: usize, token: &str, source: ParseIntError) -> Self {
        Self::Format {
            line,
            message: format!("cell '{token}' is not an integer"),
            source: Some(source),
        }
    }

    /// Check if this error was caused by caller input.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidDecimalPlaces { .. } | Self::Format { .. })
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Format { .. } => "E002",
            Self::InvalidDecimalPlaces { .. } => "E003",
        }
    }
}
