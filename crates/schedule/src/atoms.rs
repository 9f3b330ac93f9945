//! Field-by-field editing of a CRON expression.
//!
//! The advanced editor shows one text box per field and rewrites the whole
//! expression whenever a box changes. [`CronAtoms`] is that state: seven
//! owned slots that can be read, replaced and rendered back to text.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fields::FieldKind;

/// Below this many tokens an expression is read as Unix
/// `minute hour day-of-month month day-of-week`.
const QUARTZ_MIN_FIELDS: usize = 6;

/// One slot per CRON field. Empty means "not present in the text".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CronAtoms {
    pub second: String,
    pub minute: String,
    pub hour: String,
    pub day_of_month: String,
    pub month: String,
    pub day_of_week: String,
    pub year: String,
}

impl CronAtoms {
    /// Read an expression into slots. Never fails.
    ///
    /// Six or more tokens are read positionally as Quartz (tokens past the
    /// year are dropped). Fewer are read as the 5-field Unix layout with
    /// second and year left empty; missing trailing fields stay empty.
    pub fn from_expression(expr: &str) -> Self {
        let tokens: Vec<&str> = expr.split_whitespace().collect();
        let slot = |i: usize| tokens.get(i).map_or_else(String::new, |t| t.to_string());

        if tokens.len() < QUARTZ_MIN_FIELDS {
            debug!(cron = %expr, fields = tokens.len(), "reading as unix cron");
            return Self {
                second: String::new(),
                minute: slot(0),
                hour: slot(1),
                day_of_month: slot(2),
                month: slot(3),
                day_of_week: slot(4),
                year: String::new(),
            };
        }

        if tokens.len() > 7 {
            debug!(cron = %expr, extra = tokens.len() - 7, "dropping tokens past the year");
        }
        Self {
            second: slot(0),
            minute: slot(1),
            hour: slot(2),
            day_of_month: slot(3),
            month: slot(4),
            day_of_week: slot(5),
            year: slot(6),
        }
    }

    pub fn get(&self, kind: FieldKind) -> &str {
        match kind {
            FieldKind::Second => &self.second,
            FieldKind::Minute => &self.minute,
            FieldKind::Hour => &self.hour,
            FieldKind::DayOfMonth => &self.day_of_month,
            FieldKind::Month => &self.month,
            FieldKind::DayOfWeek => &self.day_of_week,
            FieldKind::Year => &self.year,
        }
    }

    /// Replace one slot. Surrounding whitespace is trimmed.
    pub fn set(&mut self, kind: FieldKind, value: &str) {
        let slot = match kind {
            FieldKind::Second => &mut self.second,
            FieldKind::Minute => &mut self.minute,
            FieldKind::Hour => &mut self.hour,
            FieldKind::DayOfMonth => &mut self.day_of_month,
            FieldKind::Month => &mut self.month,
            FieldKind::DayOfWeek => &mut self.day_of_week,
            FieldKind::Year => &mut self.year,
        };
        *slot = value.trim().to_string();
    }

    /// Render back to text.
    ///
    /// With second and year both empty the result is the 5-field Unix form.
    /// Otherwise it is Quartz: an empty second becomes `0` and an empty year
    /// is left off. An empty field between them becomes `*` so later fields
    /// keep their position.
    pub fn to_expression(&self) -> String {
        let every = |field: &str| {
            if field.is_empty() {
                "*".to_string()
            } else {
                field.to_string()
            }
        };
        let middle = [
            &self.minute,
            &self.hour,
            &self.day_of_month,
            &self.month,
            &self.day_of_week,
        ]
        .map(|field| every(field.as_str()));

        if self.second.is_empty() && self.year.is_empty() {
            return middle.join(" ");
        }

        let second = if self.second.is_empty() { "0" } else { self.second.as_str() };
        let mut parts = Vec::with_capacity(7);
        parts.push(second.to_string());
        parts.extend(middle);
        if !self.year.is_empty() {
            parts.push(self.year.clone());
        }
        parts.join(" ")
    }

    /// Copy with one field replaced, rendered as text.
    pub fn with_field(&self, kind: FieldKind, value: &str) -> String {
        let mut atoms = self.clone();
        atoms.set(kind, value);
        atoms.to_expression()
    }
}

/// Replace one field of `cron` and return the rewritten expression.
pub fn with_field(cron: &str, kind: FieldKind, value: &str) -> String {
    CronAtoms::from_expression(cron).with_field(kind, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::is_valid_cron;

    #[test]
    fn reads_seven_fields() {
        let atoms = CronAtoms::from_expression("0 15 10 ? * MON 2030");
        assert_eq!(atoms.second, "0");
        assert_eq!(atoms.get(FieldKind::Minute), "15");
        assert_eq!(atoms.get(FieldKind::DayOfWeek), "MON");
        assert_eq!(atoms.get(FieldKind::Year), "2030");
    }

    #[test]
    fn six_fields_leave_year_empty() {
        let atoms = CronAtoms::from_expression("0 */5 * * * ?");
        assert_eq!(atoms.minute, "*/5");
        assert_eq!(atoms.year, "");
        assert_eq!(atoms.to_expression(), "0 */5 * * * ?");
    }

    #[test]
    fn five_fields_read_as_unix() {
        let atoms = CronAtoms::from_expression("*/15 2 * * 1-5");
        assert_eq!(atoms.second, "");
        assert_eq!(atoms.minute, "*/15");
        assert_eq!(atoms.hour, "2");
        assert_eq!(atoms.day_of_week, "1-5");
        assert_eq!(atoms.year, "");
        assert_eq!(atoms.to_expression(), "*/15 2 * * 1-5");
    }

    #[test]
    fn short_input_fills_from_minute() {
        let atoms = CronAtoms::from_expression("0 30 6");
        assert_eq!(atoms.minute, "0");
        assert_eq!(atoms.hour, "30");
        assert_eq!(atoms.day_of_month, "6");
        assert_eq!(atoms.month, "");
        assert_eq!(CronAtoms::from_expression(""), CronAtoms::default());
    }

    #[test]
    fn tokens_past_the_year_are_dropped() {
        let atoms = CronAtoms::from_expression("0 0 5 ? * MON * extra tokens");
        assert_eq!(atoms.year, "*");
        assert_eq!(atoms.to_expression(), "0 0 5 ? * MON *");
    }

    #[test]
    fn replace_each_field_in_place() {
        let cron = "0 15 10 ? * MON *";
        assert_eq!(with_field(cron, FieldKind::Second, "30"), "30 15 10 ? * MON *");
        assert_eq!(with_field(cron, FieldKind::Minute, "45"), "0 45 10 ? * MON *");
        assert_eq!(with_field(cron, FieldKind::Hour, "*/2"), "0 15 */2 ? * MON *");
        assert_eq!(with_field(cron, FieldKind::DayOfMonth, "L"), "0 15 10 L * MON *");
        assert_eq!(with_field(cron, FieldKind::Month, "JAN"), "0 15 10 ? JAN MON *");
        assert_eq!(with_field(cron, FieldKind::DayOfWeek, "MON-FRI"), "0 15 10 ? * MON-FRI *");
        assert_eq!(with_field(cron, FieldKind::Year, "2030"), "0 15 10 ? * MON 2030");
    }

    #[test]
    fn clearing_year_drops_it() {
        assert_eq!(with_field("0 15 10 ? * MON 2030", FieldKind::Year, ""), "0 15 10 ? * MON");
    }

    #[test]
    fn cleared_middle_field_keeps_positions() {
        let cron = with_field("0 15 10 ? * MON *", FieldKind::Hour, " ");
        assert_eq!(cron, "0 15 * ? * MON *");
        assert_eq!(CronAtoms::from_expression(&cron).day_of_week, "MON");
    }

    #[test]
    fn unix_expression_becomes_quartz_when_second_or_year_is_set() {
        assert_eq!(with_field("30 6 * * 1", FieldKind::Second, "0"), "0 30 6 * * 1");
        assert_eq!(with_field("30 6 * * 1", FieldKind::Year, "2030"), "0 30 6 * * 1 2030");
        assert_eq!(with_field("30 6 * * 1", FieldKind::Minute, "45"), "45 6 * * 1");
    }

    #[test]
    fn edits_accumulate_on_atoms() {
        let mut atoms = CronAtoms::from_expression("0 0 0 1/1 * ? *");
        atoms.set(FieldKind::DayOfMonth, "?");
        atoms.set(FieldKind::DayOfWeek, "MON-FRI");
        atoms.set(FieldKind::Hour, "5");
        let cron = atoms.to_expression();
        assert_eq!(cron, "0 0 5 ? * MON-FRI *");
        assert!(is_valid_cron(&cron));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(CronAtoms::from_expression("0 15 10 ? * MON *")).unwrap();
        assert_eq!(json["dayOfMonth"], "?");
        assert_eq!(json["dayOfWeek"], "MON");
        assert_eq!(json["year"], "*");
    }
}
