//! CRON text -> simple schedule, best effort.

use tracing::debug;

use super::SimpleScheduleSpec;
use crate::fields::{is_plain_number, DAY_OF_WEEK, HOUR, MINUTE};
use crate::weekday::{parse_day_candidate, WeekdaySelection};

/// Read minute, hour and day-of-week out of a CRON expression.
///
/// Only positions 1, 2 and 5 are looked at; seconds, day-of-month, month and
/// year are ignored. Minute and hour stay unset unless they are plain
/// digits. A missing day-of-week field yields an empty selection.
pub fn parse_cron_string(cron: &str) -> SimpleScheduleSpec {
    let fields: Vec<&str> = cron.split_whitespace().collect();

    SimpleScheduleSpec {
        minute: numeric_field(&fields, MINUTE),
        hour: numeric_field(&fields, HOUR),
        day_of_week: fields
            .get(DAY_OF_WEEK)
            .map(|field| parse_day_of_week(field))
            .unwrap_or_default(),
    }
}

fn numeric_field(fields: &[&str], index: usize) -> Option<u32> {
    fields
        .get(index)
        .filter(|field| is_plain_number(field))
        .and_then(|field| field.parse().ok())
}

/// Decode a day-of-week field.
///
/// Checked in order: wildcard, comma list, dash range, single token. A list
/// element that is itself a range is not expanded. Ranges only fill when
/// the end comes after the start, so `FRI-MON` and `MON-MON` select nothing.
pub(crate) fn parse_day_of_week(field: &str) -> WeekdaySelection {
    if field == "*" || field == "?" {
        return WeekdaySelection::all();
    }

    let mut days = WeekdaySelection::none();

    if field.contains(',') {
        for token in field.split(',') {
            select_token(&mut days, token);
        }
    } else if field.contains('-') {
        let mut bounds = field.split('-');
        let start = bounds.next().and_then(parse_day_candidate);
        let end = bounds.next().and_then(parse_day_candidate);
        match (start, end) {
            (Some(start), Some(end)) if end > start => {
                for index in start..=end {
                    days.set(index, true);
                }
            }
            (Some(_), Some(_)) => {
                debug!(field = %field, "day-of-week range does not ascend, nothing selected");
            }
            _ => {
                debug!(field = %field, "ignoring day-of-week range with unresolvable bound");
            }
        }
    } else {
        select_token(&mut days, field);
    }

    days
}

fn select_token(days: &mut WeekdaySelection, token: &str) {
    match parse_day_candidate(token) {
        Some(index) => {
            days.set(index, true);
        }
        None => debug!(token = %token, "ignoring unresolvable day-of-week token"),
    }
}
