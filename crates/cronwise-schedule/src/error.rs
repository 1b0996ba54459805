//! Error types for cron expression parsing.

use thiserror::Error;

/// Broad classification of parse failures, for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The expression as a whole is malformed (fewer than 6 fields).
    Structural,
    /// A field or sub-expression does not match any recognized syntax.
    Format,
    /// A value or range falls outside the field's legal boundaries.
    Range,
    /// An interval step is not a positive integer.
    Step,
}

impl ErrorKind {
    /// Returns the kind as a stable lowercase string (e.g. for JSON output).
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Structural => "structural",
            ErrorKind::Format => "format",
            ErrorKind::Range => "range",
            ErrorKind::Step => "step",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error produced while parsing a single field specification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    /// A bare value lies outside the field's boundaries.
    #[error("value {value} is out of range ({min}-{max})")]
    ValueOutOfRange { value: u32, min: u32, max: u32 },

    /// A range has an out-of-bounds endpoint or start > end.
    #[error("range '{text}' is invalid; must be within {min}-{max}")]
    InvalidRange { text: String, min: u32, max: u32 },

    /// A range does not have exactly two sides.
    #[error("invalid range format: {text}")]
    RangeFormat { text: String },

    /// The left side of a range is not an integer.
    #[error("invalid range start: {text}")]
    RangeStart { text: String },

    /// The right side of a range is not an integer.
    #[error("invalid range end: {text}")]
    RangeEnd { text: String },

    /// An interval does not have exactly two `/`-separated parts.
    #[error("invalid interval format: {text}")]
    IntervalFormat { text: String },

    /// An interval step is not a positive integer.
    #[error("invalid interval value: {text}")]
    InvalidStep { text: String },

    /// The base of an interval failed to parse as a field specification.
    #[error("invalid range for interval: '{text}'")]
    IntervalBase {
        text: String,
        #[source]
        source: Box<FieldError>,
    },

    /// No sub-parser claimed the field.
    #[error("unrecognized format for field: {text}")]
    Unrecognized { text: String },
}

impl FieldError {
    /// Classifies this error. An interval base error takes the kind of the
    /// underlying failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FieldError::ValueOutOfRange { .. } | FieldError::InvalidRange { .. } => {
                ErrorKind::Range
            }
            FieldError::InvalidStep { .. } => ErrorKind::Step,
            FieldError::IntervalBase { source, .. } => source.kind(),
            FieldError::RangeFormat { .. }
            | FieldError::RangeStart { .. }
            | FieldError::RangeEnd { .. }
            | FieldError::IntervalFormat { .. }
            | FieldError::Unrecognized { .. } => ErrorKind::Format,
        }
    }
}

/// Top-level error for parsing a whole cron expression.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The expression has fewer than the 6 required whitespace-separated
    /// fields (5 time fields plus a command).
    #[error("invalid cron expression: requires at least 6 fields, got {found}")]
    TooFewFields { found: usize },

    /// A time field failed to parse; carries its 1-based position and the
    /// original field text.
    #[error("error in field {position} ('{text}'): {source}")]
    Field {
        position: usize,
        text: String,
        #[source]
        source: FieldError,
    },
}

impl ParseError {
    /// Classifies this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::TooFewFields { .. } => ErrorKind::Structural,
            ParseError::Field { source, .. } => source.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_display() {
        let err = FieldError::ValueOutOfRange {
            value: 60,
            min: 0,
            max: 59,
        };
        assert_eq!(err.to_string(), "value 60 is out of range (0-59)");

        let err = FieldError::InvalidRange {
            text: "5-1".to_string(),
            min: 0,
            max: 23,
        };
        assert_eq!(err.to_string(), "range '5-1' is invalid; must be within 0-23");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::Field {
            position: 2,
            text: "5-1".to_string(),
            source: FieldError::InvalidRange {
                text: "5-1".to_string(),
                min: 0,
                max: 23,
            },
        };
        assert_eq!(
            err.to_string(),
            "error in field 2 ('5-1'): range '5-1' is invalid; must be within 0-23"
        );

        let err = ParseError::TooFewFields { found: 3 };
        assert!(err.to_string().contains("requires at least 6 fields"));
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            ParseError::TooFewFields { found: 0 }.kind(),
            ErrorKind::Structural
        );
        assert_eq!(
            FieldError::InvalidStep {
                text: "0".to_string()
            }
            .kind(),
            ErrorKind::Step
        );
        assert_eq!(
            FieldError::Unrecognized {
                text: "x".to_string()
            }
            .kind(),
            ErrorKind::Format
        );

        // An interval base error reports the kind of the wrapped failure.
        let err = FieldError::IntervalBase {
            text: "60-70".to_string(),
            source: Box::new(FieldError::InvalidRange {
                text: "60-70".to_string(),
                min: 0,
                max: 59,
            }),
        };
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn test_error_kind_strings() {
        assert_eq!(ErrorKind::Structural.as_str(), "structural");
        assert_eq!(ErrorKind::Step.to_string(), "step");
    }
}
