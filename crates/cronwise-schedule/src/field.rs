//! Cron field kinds and their legal value boundaries.

use serde::{Deserialize, Serialize};

/// The five positional time fields of a cron expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Minute of the hour (0-59).
    Minute,
    /// Hour of the day (0-23).
    Hour,
    /// Day of the month (1-31).
    DayOfMonth,
    /// Month of the year (1-12).
    Month,
    /// Day of the week (0-6, Sunday = 0).
    DayOfWeek,
}

impl FieldKind {
    /// All field kinds, in the positional order they appear in an expression.
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Minute,
        FieldKind::Hour,
        FieldKind::DayOfMonth,
        FieldKind::Month,
        FieldKind::DayOfWeek,
    ];

    /// Returns the inclusive `(min, max)` boundary for this field kind.
    pub fn boundaries(self) -> (u32, u32) {
        match self {
            FieldKind::Minute => (0, 59),
            FieldKind::Hour => (0, 23),
            FieldKind::DayOfMonth => (1, 31),
            FieldKind::Month => (1, 12),
            FieldKind::DayOfWeek => (0, 6),
        }
    }

    /// Returns true if `value` lies within this field's boundaries.
    pub fn contains(self, value: u32) -> bool {
        let (min, max) = self.boundaries();
        value >= min && value <= max
    }

    /// Human-readable label, as rendered by the schedule formatter.
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Minute => "minute",
            FieldKind::Hour => "hour",
            FieldKind::DayOfMonth => "day of month",
            FieldKind::Month => "month",
            FieldKind::DayOfWeek => "day of week",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(FieldKind::Minute.boundaries(), (0, 59));
        assert_eq!(FieldKind::Hour.boundaries(), (0, 23));
        assert_eq!(FieldKind::DayOfMonth.boundaries(), (1, 31));
        assert_eq!(FieldKind::Month.boundaries(), (1, 12));
        assert_eq!(FieldKind::DayOfWeek.boundaries(), (0, 6));
    }

    #[test]
    fn test_contains_edges() {
        assert!(FieldKind::Minute.contains(0));
        assert!(FieldKind::Minute.contains(59));
        assert!(!FieldKind::Minute.contains(60));

        assert!(!FieldKind::DayOfMonth.contains(0));
        assert!(FieldKind::DayOfMonth.contains(1));
        assert!(FieldKind::DayOfMonth.contains(31));
        assert!(!FieldKind::DayOfMonth.contains(32));

        assert!(FieldKind::DayOfWeek.contains(6));
        assert!(!FieldKind::DayOfWeek.contains(7));
    }

    #[test]
    fn test_positional_order() {
        assert_eq!(FieldKind::ALL[0], FieldKind::Minute);
        assert_eq!(FieldKind::ALL[4], FieldKind::DayOfWeek);
    }

    #[test]
    fn test_labels() {
        assert_eq!(FieldKind::DayOfMonth.label(), "day of month");
        assert_eq!(FieldKind::DayOfWeek.to_string(), "day of week");
    }
}
