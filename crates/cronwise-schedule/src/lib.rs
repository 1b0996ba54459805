//! Cronwise schedule library.
//!
//! This crate parses standard five-field cron expressions into fully expanded
//! schedules: every field specification (lists, intervals, ranges, wildcards,
//! bare values, and nestings of them) is validated against its field's legal
//! boundaries and enumerated into an ascending sequence of concrete values.
//!
//! # Example
//!
//! ```
//! use cronwise_schedule::{parse, FieldKind};
//!
//! let schedule = parse("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();
//! assert_eq!(schedule.minutes, vec![0, 15, 30, 45]);
//! assert_eq!(schedule.field(FieldKind::Hour), &[0]);
//! assert_eq!(schedule.command, "/usr/bin/find");
//! ```
//!
//! Parsing is a pure, synchronous computation over the input string. There is
//! no job execution, no timezone handling, and no `@daily`-style shortcut
//! support; each field is validated independently.
//!
//! # Modules
//!
//! - [`field`]: field kinds and their boundary ranges
//! - [`parse`](mod@parse): the dispatch chain and format sub-parsers
//! - [`schedule`]: the expanded schedule type and its table formatter
//! - [`error`]: error types with a stable kind classification

pub mod error;
pub mod field;
pub mod parse;
pub mod schedule;

pub use error::{ErrorKind, FieldError, ParseError};
pub use field::FieldKind;
pub use parse::{parse, parse_field};
pub use schedule::Schedule;

#[cfg(test)]
mod integration_tests {
    use super::*;

    /// The parsed schedule renders back as the canonical field table.
    #[test]
    fn test_parse_then_format() {
        let schedule = parse("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();
        let expected = "\
minute        0 15 30 45
hour          0
day of month  1 15
month         1 2 3 4 5 6 7 8 9 10 11 12
day of week   1 2 3 4 5
command       /usr/bin/find";
        assert_eq!(schedule.to_string(), expected);
    }

    #[test]
    fn test_error_surfaces_offending_field() {
        let err = parse("*/15 0 32 * * /usr/bin/find").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(
            err.to_string(),
            "error in field 3 ('32'): value 32 is out of range (1-31)"
        );
    }
}
