//! Simple schedule value type.

use serde::{Deserialize, Serialize};

use crate::weekday::WeekdaySelection;

/// "Fire at `hour:minute` on these weekdays", every day of month, every
/// month, every year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleScheduleSpec {
    /// Minute of the hour. Unset builds as `0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minute: Option<u32>,
    /// Hour of the day (24h). Unset builds as `0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour: Option<u32>,
    pub day_of_week: WeekdaySelection,
}

impl SimpleScheduleSpec {
    pub fn new(minute: u32, hour: u32, day_of_week: WeekdaySelection) -> Self {
        Self {
            minute: Some(minute),
            hour: Some(hour),
            day_of_week,
        }
    }

    /// Every day at `hour:minute`.
    pub fn daily(minute: u32, hour: u32) -> Self {
        Self::new(minute, hour, WeekdaySelection::all())
    }
}
