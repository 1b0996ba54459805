//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag on the expand command, so other tools
//! can consume the expansion result without scraping the field table.

use cronwise_schedule::{ParseError, Schedule};
use serde::{Deserialize, Serialize};

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error kind ("structural", "format", "range", "step").
    pub kind: String,
    /// Human-readable error message.
    pub message: String,
}

impl JsonError {
    /// Builds a JSON error from a parse error, preserving its kind.
    pub fn from_parse_error(err: &ParseError) -> Self {
        Self {
            kind: err.kind().as_str().to_string(),
            message: err.to_string(),
        }
    }
}

/// Structured output for the expand command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpandOutput {
    /// Whether the expression parsed successfully.
    pub ok: bool,
    /// The expanded schedule (present on success).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
    /// The parse error (present on failure).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonError>,
}

impl ExpandOutput {
    /// Creates a successful output.
    pub fn success(schedule: Schedule) -> Self {
        Self {
            ok: true,
            schedule: Some(schedule),
            error: None,
        }
    }

    /// Creates a failed output.
    pub fn failure(err: &ParseError) -> Self {
        Self {
            ok: false,
            schedule: None,
            error: Some(JsonError::from_parse_error(err)),
        }
    }
}
