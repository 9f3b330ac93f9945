//! "Repeat every N days/months/years at hh:mm am/pm" schedules.
//!
//! This is the other tab of the schedule editor: a 12h clock time plus
//! optional repeat intervals, rendered as a Quartz expression that pins the
//! day-of-week to `?` and steps day-of-month, month and year.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Half of a 12-hour clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockPeriod {
    #[default]
    Am,
    Pm,
}

impl fmt::Display for ClockPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Am => f.write_str("am"),
            Self::Pm => f.write_str("pm"),
        }
    }
}

/// Convert a 12-hour clock reading to 24-hour. `12 am` is midnight,
/// `12 pm` is noon. Hours past the clock face saturate rather than wrap.
pub fn to_24_hour(hour: u32, period: ClockPeriod) -> u32 {
    match (period, hour) {
        (ClockPeriod::Am, 12) => 0,
        (ClockPeriod::Am, h) => h,
        (ClockPeriod::Pm, 12) => 12,
        (ClockPeriod::Pm, h) => h.saturating_add(12),
    }
}

/// Cap a typed minute at 59.
pub fn clamp_minute(minute: u32) -> u32 {
    minute.min(59)
}

/// Keep a typed hour on the editor's clock face: 0..=11 for am,
/// 1..=12 for pm.
pub fn clamp_hour(hour: u32, period: ClockPeriod) -> u32 {
    match period {
        ClockPeriod::Am => hour.min(11),
        ClockPeriod::Pm => hour.clamp(1, 12),
    }
}

/// Inputs of the repeat-interval editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalSchedule {
    pub minute: u32,
    /// Hour on the 12h clock; see [`period`](Self::period).
    pub hour: u32,
    #[serde(default)]
    pub period: ClockPeriod,
    /// Fire every N days. Unset (or 0) means every day.
    #[serde(default)]
    pub every_days: Option<u32>,
    /// Fire every N months. Unset (or 0) means every month.
    #[serde(default)]
    pub every_months: Option<u32>,
    /// Fire every N years starting with the current one. Unset (or 0) means
    /// every year.
    #[serde(default)]
    pub every_years: Option<u32>,
}

impl IntervalSchedule {
    /// Render as `0 {m} {h24} {dom} {month} ? {year}`.
    ///
    /// `current_year` anchors the year step; callers pass the wall-clock year.
    pub fn to_cron_string(&self, current_year: i32) -> String {
        let day_of_month = match step(self.every_days) {
            Some(days) => format!("1/{days}"),
            None => "1/1".to_string(),
        };
        let month = match step(self.every_months) {
            Some(months) => format!("1/{months}"),
            None => "*".to_string(),
        };
        let year = match step(self.every_years) {
            Some(years) => format!("{current_year}/{years}"),
            None => "*".to_string(),
        };

        format!(
            "0 {} {} {} {} ? {}",
            self.minute,
            to_24_hour(self.hour, self.period),
            day_of_month,
            month,
            year,
        )
    }
}

fn step(value: Option<u32>) -> Option<u32> {
    value.filter(|v| *v > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::is_valid_cron;

    #[test]
    fn twelve_hour_conversion() {
        assert_eq!(to_24_hour(12, ClockPeriod::Am), 0);
        assert_eq!(to_24_hour(0, ClockPeriod::Am), 0);
        assert_eq!(to_24_hour(11, ClockPeriod::Am), 11);
        assert_eq!(to_24_hour(12, ClockPeriod::Pm), 12);
        assert_eq!(to_24_hour(3, ClockPeriod::Pm), 15);
        assert_eq!(to_24_hour(11, ClockPeriod::Pm), 23);
    }

    #[test]
    fn pm_conversion_saturates() {
        assert_eq!(to_24_hour(u32::MAX, ClockPeriod::Pm), u32::MAX);
        assert_eq!(to_24_hour(u32::MAX - 5, ClockPeriod::Pm), u32::MAX);
    }

    #[test]
    fn deserialized_out_of_range_hour_renders() {
        let schedule: IntervalSchedule =
            serde_json::from_str(r#"{"minute":0,"hour":4294967295,"period":"pm"}"#).unwrap();
        let cron = schedule.to_cron_string(2026);
        assert_eq!(cron, "0 0 4294967295 1/1 * ? *");
        assert!(!is_valid_cron(&cron));
    }

    #[test]
    fn clamping_follows_clock_face() {
        assert_eq!(clamp_minute(75), 59);
        assert_eq!(clamp_minute(30), 30);
        assert_eq!(clamp_hour(14, ClockPeriod::Am), 11);
        assert_eq!(clamp_hour(0, ClockPeriod::Pm), 1);
        assert_eq!(clamp_hour(13, ClockPeriod::Pm), 12);
        assert_eq!(clamp_hour(5, ClockPeriod::Pm), 5);
    }

    #[test]
    fn defaults_render_daily_midnight() {
        assert_eq!(IntervalSchedule::default().to_cron_string(2026), "0 0 0 1/1 * ? *");
    }

    #[test]
    fn every_n_days_at_pm_time() {
        let schedule = IntervalSchedule {
            minute: 30,
            hour: 2,
            period: ClockPeriod::Pm,
            every_days: Some(3),
            ..Default::default()
        };
        assert_eq!(schedule.to_cron_string(2026), "0 30 14 1/3 * ? *");
    }

    #[test]
    fn month_and_year_steps() {
        let schedule = IntervalSchedule {
            minute: 5,
            hour: 9,
            period: ClockPeriod::Am,
            every_days: None,
            every_months: Some(2),
            every_years: Some(1),
        };
        assert_eq!(schedule.to_cron_string(2026), "0 5 9 1/1 1/2 ? 2026/1");
    }

    #[test]
    fn zero_step_means_unset() {
        let schedule = IntervalSchedule {
            every_days: Some(0),
            every_months: Some(0),
            every_years: Some(0),
            ..Default::default()
        };
        assert_eq!(schedule.to_cron_string(2026), "0 0 0 1/1 * ? *");
    }

    #[test]
    fn rendered_expressions_validate() {
        let schedule = IntervalSchedule {
            minute: 59,
            hour: 12,
            period: ClockPeriod::Pm,
            every_days: Some(7),
            every_months: Some(6),
            every_years: Some(2),
        };
        assert!(is_valid_cron(&schedule.to_cron_string(2026)));
    }
}
