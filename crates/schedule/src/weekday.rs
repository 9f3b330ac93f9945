//! Weekday selection and day-of-week token resolution.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CronError;

/// Three-letter day codes, indexed Sunday (0) through Saturday (6).
pub const DAY_CODES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// One flag per weekday, Sunday first.
///
/// Serializes as a plain array of seven booleans, the shape the editor
/// checkboxes bind to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekdaySelection([bool; 7]);

impl WeekdaySelection {
    pub const fn new(days: [bool; 7]) -> Self {
        Self(days)
    }

    /// Every day selected.
    pub const fn all() -> Self {
        Self([true; 7])
    }

    /// No day selected.
    pub const fn none() -> Self {
        Self([false; 7])
    }

    /// Build a selection from day indices. Indices outside 0..7 are ignored.
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut days = Self::none();
        for index in indices {
            days.set(index, true);
        }
        days
    }

    /// Strictly parse a comma-separated list of day tokens (`MON,wed,5`).
    ///
    /// Unlike CRON parsing, which skips what it cannot read, this rejects the
    /// first unknown token. Meant for user-supplied arguments.
    pub fn from_codes(list: &str) -> Result<Self, CronError> {
        let mut days = Self::none();
        for token in list.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let index =
                parse_day_candidate(token).ok_or_else(|| CronError::UnknownDay(token.to_string()))?;
            days.set(index, true);
        }
        Ok(days)
    }

    /// Set the flag for `index`. Returns `false` (and changes nothing) when
    /// the index is not a weekday.
    pub fn set(&mut self, index: usize, selected: bool) -> bool {
        match self.0.get_mut(index) {
            Some(flag) => {
                *flag = selected;
                true
            }
            None => false,
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    pub fn is_all(&self) -> bool {
        self.0.iter().all(|d| *d)
    }

    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(|d| *d)
    }

    pub fn count(&self) -> usize {
        self.0.iter().filter(|d| **d).count()
    }

    /// Day codes of the selected days, in Sunday-first order.
    pub fn selected_codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0
            .iter()
            .zip(DAY_CODES)
            .filter(|(selected, _)| **selected)
            .map(|(_, code)| code)
    }

    pub fn as_array(&self) -> [bool; 7] {
        self.0
    }
}

impl From<[bool; 7]> for WeekdaySelection {
    fn from(days: [bool; 7]) -> Self {
        Self(days)
    }
}

impl fmt::Display for WeekdaySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let codes: Vec<&str> = self.selected_codes().collect();
        f.write_str(&codes.join(","))
    }
}

/// Resolve a single day-of-week token to a Sunday-first index.
///
/// A run of decimal digits is taken as the index itself; anything else is
/// matched case-insensitively against [`DAY_CODES`]. Returns `None` for
/// tokens that name no weekday, including numbers past 6.
pub fn parse_day_candidate(token: &str) -> Option<usize> {
    let token = token.trim();
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        return token.parse::<usize>().ok().filter(|i| *i < DAY_CODES.len());
    }
    let upper = token.to_ascii_uppercase();
    DAY_CODES.iter().position(|code| *code == upper)
}
