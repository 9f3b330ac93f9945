//! Simple schedule -> CRON text.

use super::SimpleScheduleSpec;
use crate::weekday::WeekdaySelection;

/// Build a 7-field Quartz expression: `0 {minute} {hour} ? * {dow} *`.
///
/// Minute and hour default to `0` when unset and are not range-checked;
/// run the result through [`validate_cron`](crate::validate_cron) to
/// catch out-of-range values.
pub fn build_cron_string(spec: &SimpleScheduleSpec) -> String {
    format!(
        "0 {} {} ? * {} *",
        spec.minute.unwrap_or(0),
        spec.hour.unwrap_or(0),
        day_of_week_field(&spec.day_of_week),
    )
}

/// `*` for every day, and also for no day at all (an empty selection means
/// "every day", never "never"). Otherwise the selected codes, comma-joined.
fn day_of_week_field(days: &WeekdaySelection) -> String {
    if days.is_all() || days.is_empty() {
        return "*".to_string();
    }
    days.selected_codes().collect::<Vec<_>>().join(",")
}
