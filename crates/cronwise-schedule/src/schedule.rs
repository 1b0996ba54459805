//! The expanded schedule produced by a successful parse.

use serde::{Deserialize, Serialize};

use crate::field::FieldKind;

/// Width of the label column in the rendered field table.
const LABEL_WIDTH: usize = 14;

/// A fully expanded cron schedule: one ascending sequence of concrete values
/// per time field, plus the command string.
///
/// Every value sequence is non-empty and sorted ascending; parsing either
/// produces at least one value per field or fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Minutes of the hour (0-59).
    pub minutes: Vec<u32>,
    /// Hours of the day (0-23).
    pub hours: Vec<u32>,
    /// Days of the month (1-31).
    pub days_of_month: Vec<u32>,
    /// Months of the year (1-12).
    pub months: Vec<u32>,
    /// Days of the week (0-6).
    pub days_of_week: Vec<u32>,
    /// Everything after the fifth field, rejoined with single spaces.
    pub command: String,
}

impl Schedule {
    /// Returns the expanded values for one field kind.
    pub fn field(&self, kind: FieldKind) -> &[u32] {
        match kind {
            FieldKind::Minute => &self.minutes,
            FieldKind::Hour => &self.hours,
            FieldKind::DayOfMonth => &self.days_of_month,
            FieldKind::Month => &self.months,
            FieldKind::DayOfWeek => &self.days_of_week,
        }
    }

    pub(crate) fn field_mut(&mut self, kind: FieldKind) -> &mut Vec<u32> {
        match kind {
            FieldKind::Minute => &mut self.minutes,
            FieldKind::Hour => &mut self.hours,
            FieldKind::DayOfMonth => &mut self.days_of_month,
            FieldKind::Month => &mut self.months,
            FieldKind::DayOfWeek => &mut self.days_of_week,
        }
    }

    pub(crate) fn empty(command: String) -> Self {
        Self {
            minutes: Vec::new(),
            hours: Vec::new(),
            days_of_month: Vec::new(),
            months: Vec::new(),
            days_of_week: Vec::new(),
            command,
        }
    }
}

/// Renders the schedule as a fixed-width field table:
///
/// ```text
/// minute        0 15 30 45
/// hour          0
/// day of month  1 15
/// month         1 2 3 4 5 6 7 8 9 10 11 12
/// day of week   1 2 3 4 5
/// command       /usr/bin/find
/// ```
impl std::fmt::Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for kind in FieldKind::ALL {
            let values: Vec<String> = self.field(kind).iter().map(u32::to_string).collect();
            writeln!(
                f,
                "{:<width$}{}",
                kind.label(),
                values.join(" "),
                width = LABEL_WIDTH
            )?;
        }
        write!(f, "{:<width$}{}", "command", self.command, width = LABEL_WIDTH)
    }
}
