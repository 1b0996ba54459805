//! The field parsing engine: an ordered chain of format-specific sub-parsers.
//!
//! Each sub-parser recognizes exactly one syntax and either claims the field
//! or declines. The chain tries them in a fixed precedence order:
//!
//! 1. list (contains `,`)
//! 2. interval (contains `/`)
//! 3. range (contains `-`)
//! 4. wildcard (exactly `*`)
//! 5. single value (bare integer)
//!
//! The first structural character class found by this order wins, so a field
//! like `1-7,15` is a list whose sub-fields are parsed recursively, never a
//! range that happens to contain a comma. List and interval re-enter the full
//! chain on their sub-expressions, which is what allows nested forms such as
//! `1-7,15,21-23/2`.

use std::collections::BTreeSet;

use crate::error::{FieldError, ParseError};
use crate::field::FieldKind;
use crate::schedule::Schedule;

/// Outcome of one sub-parser attempt.
///
/// `None` means the sub-parser does not recognize the syntax and the chain
/// falls through to the next one. `Some(Err)` is definitive: a recognized but
/// malformed field never defers to a lower-precedence parser.
type Attempt = Option<Result<Vec<u32>, FieldError>>;

/// Sub-parsers in precedence order.
const SUB_PARSERS: [fn(&str, FieldKind) -> Attempt; 5] = [
    parse_list,
    parse_interval,
    parse_range,
    parse_wildcard,
    parse_single_value,
];

/// Parses a full cron expression into an expanded [`Schedule`].
///
/// The expression must contain at least 6 whitespace-separated tokens: the
/// five time fields in positional order (minute, hour, day of month, month,
/// day of week) followed by the command. Tokens past the fifth are rejoined
/// with single spaces to form the command string.
///
/// Field errors are wrapped with the field's 1-based position and original
/// text, e.g. `error in field 2 ('5-1'): ...`.
pub fn parse(expression: &str) -> Result<Schedule, ParseError> {
    let tokens: Vec<&str> = expression.split_whitespace().collect();
    if tokens.len() < 6 {
        return Err(ParseError::TooFewFields {
            found: tokens.len(),
        });
    }

    let mut schedule = Schedule::empty(tokens[5..].join(" "));
    for (index, kind) in FieldKind::ALL.into_iter().enumerate() {
        let text = tokens[index];
        let values = parse_field(text, kind).map_err(|source| ParseError::Field {
            position: index + 1,
            text: text.to_string(),
            source,
        })?;
        *schedule.field_mut(kind) = values;
    }

    Ok(schedule)
}

/// Expands a single field specification into its ascending sequence of
/// concrete values for the given field kind.
///
/// Returns at least one value on success; a specification that would denote
/// nothing is reported as an error instead.
pub fn parse_field(text: &str, kind: FieldKind) -> Result<Vec<u32>, FieldError> {
    for sub_parser in SUB_PARSERS {
        if let Some(outcome) = sub_parser(text, kind) {
            return outcome;
        }
    }
    Err(FieldError::Unrecognized {
        text: text.to_string(),
    })
}

/// List syntax: comma-separated sub-fields, each parsed by a fresh pass
/// through the full chain. Values are merged, deduplicated, and returned in
/// ascending order, since sub-fields may overlap or arrive out of order.
fn parse_list(text: &str, kind: FieldKind) -> Attempt {
    if !text.contains(',') {
        return None;
    }

    let mut values = BTreeSet::new();
    for sub_field in text.split(',') {
        match parse_field(sub_field, kind) {
            Ok(expanded) => values.extend(expanded),
            Err(err) => return Some(Err(err)),
        }
    }
    Some(Ok(values.into_iter().collect()))
}

/// Interval syntax: `base/step`. The base is itself a full field
/// specification, resolved by re-entering the chain, so `*/15`, `1-7/2`, and
/// `5/10` are all valid.
fn parse_interval(text: &str, kind: FieldKind) -> Attempt {
    if !text.contains('/') {
        return None;
    }

    let parts: Vec<&str> = text.split('/').collect();
    if parts.len() != 2 {
        return Some(Err(FieldError::IntervalFormat {
            text: text.to_string(),
        }));
    }
    let (base_text, step_text) = (parts[0], parts[1]);

    let step = match step_text.parse::<u32>() {
        Ok(step) if step > 0 => step,
        _ => {
            return Some(Err(FieldError::InvalidStep {
                text: step_text.to_string(),
            }))
        }
    };

    let base = match parse_field(base_text, kind) {
        Ok(values) => values,
        Err(source) => {
            return Some(Err(FieldError::IntervalBase {
                text: base_text.to_string(),
                source: Box::new(source),
            }))
        }
    };

    // parse_field never yields an empty sequence, so the base has a first
    // and last value.
    let start = base[0];
    let (_, max) = kind.boundaries();
    // The base caps the interval only when its raw text spells out a range
    // with '-'; a bare value or '*' steps all the way to the field maximum.
    // Deliberately a literal-text check, kept for compatibility with how
    // existing expressions are interpreted.
    let end = if base_text.contains('-') {
        base[base.len() - 1]
    } else {
        max
    };

    Some(Ok((start..=end).step_by(step as usize).collect()))
}

/// Range syntax: `start-end`, both ends inclusive and within the field's
/// boundaries. Start must not exceed end; there is no wraparound.
fn parse_range(text: &str, kind: FieldKind) -> Attempt {
    if !text.contains('-') {
        return None;
    }

    let bounds: Vec<&str> = text.split('-').collect();
    if bounds.len() != 2 {
        return Some(Err(FieldError::RangeFormat {
            text: text.to_string(),
        }));
    }
    let Ok(start) = bounds[0].parse::<u32>() else {
        return Some(Err(FieldError::RangeStart {
            text: bounds[0].to_string(),
        }));
    };
    let Ok(end) = bounds[1].parse::<u32>() else {
        return Some(Err(FieldError::RangeEnd {
            text: bounds[1].to_string(),
        }));
    };

    let (min, max) = kind.boundaries();
    if !kind.contains(start) || !kind.contains(end) || start > end {
        return Some(Err(FieldError::InvalidRange {
            text: text.to_string(),
            min,
            max,
        }));
    }

    Some(Ok((start..=end).collect()))
}

/// Wildcard syntax: exactly `*`, expanding to the field's full boundary
/// range. Cannot fail.
fn parse_wildcard(text: &str, kind: FieldKind) -> Attempt {
    if text != "*" {
        return None;
    }
    let (min, max) = kind.boundaries();
    Some(Ok((min..=max).collect()))
}

/// Single value syntax: a bare integer, validated against the field's
/// boundaries. The fallback at the end of the chain.
fn parse_single_value(text: &str, kind: FieldKind) -> Attempt {
    let value = text.parse::<u32>().ok()?;
    if !kind.contains(value) {
        let (min, max) = kind.boundaries();
        return Some(Err(FieldError::ValueOutOfRange { value, min, max }));
    }
    Some(Ok(vec![value]))
}
