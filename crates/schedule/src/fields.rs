//! Positional view over a 6- or 7-field Quartz CRON expression.

use crate::error::CronError;

pub(crate) const MINUTE: usize = 1;
pub(crate) const HOUR: usize = 2;
pub(crate) const DAY_OF_WEEK: usize = 5;

/// The named positions of a Quartz CRON expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Second,
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
    Year,
}

impl FieldKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::DayOfMonth => "day_of_month",
            Self::Month => "month",
            Self::DayOfWeek => "day_of_week",
            Self::Year => "year",
        }
    }

    /// Inclusive numeric bounds accepted by Quartz for this field.
    pub fn bounds(self) -> (u32, u32) {
        match self {
            Self::Second | Self::Minute => (0, 59),
            Self::Hour => (0, 23),
            Self::DayOfMonth => (1, 31),
            Self::Month => (1, 12),
            Self::DayOfWeek => (1, 7),
            Self::Year => (1970, 2099),
        }
    }

    /// Whether `?` ("no specific value") may appear in this field.
    pub fn allows_no_specific_value(self) -> bool {
        matches!(self, Self::DayOfMonth | Self::DayOfWeek)
    }
}

/// A CRON expression split into its fields. Borrows from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CronFields<'a> {
    pub second: &'a str,
    pub minute: &'a str,
    pub hour: &'a str,
    pub day_of_month: &'a str,
    pub month: &'a str,
    pub day_of_week: &'a str,
    pub year: Option<&'a str>,
}

impl<'a> CronFields<'a> {
    /// Split on whitespace. Anything other than 6 or 7 fields is an error.
    pub fn split(expr: &'a str) -> Result<Self, CronError> {
        let parts: Vec<&'a str> = expr.split_whitespace().collect();
        match parts[..] {
            [second, minute, hour, day_of_month, month, day_of_week] => Ok(Self {
                second,
                minute,
                hour,
                day_of_month,
                month,
                day_of_week,
                year: None,
            }),
            [second, minute, hour, day_of_month, month, day_of_week, year] => Ok(Self {
                second,
                minute,
                hour,
                day_of_month,
                month,
                day_of_week,
                year: Some(year),
            }),
            _ => Err(CronError::FieldCount { got: parts.len() }),
        }
    }

    /// Fields paired with their kind, in expression order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKind, &'a str)> {
        [
            (FieldKind::Second, self.second),
            (FieldKind::Minute, self.minute),
            (FieldKind::Hour, self.hour),
            (FieldKind::DayOfMonth, self.day_of_month),
            (FieldKind::Month, self.month),
            (FieldKind::DayOfWeek, self.day_of_week),
        ]
        .into_iter()
        .chain(self.year.map(|y| (FieldKind::Year, y)))
    }
}

/// Plain base-10 digits, nothing else (no sign, no whitespace).
pub(crate) fn is_plain_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
