//! Per-field Quartz grammar: lists, ranges, steps, names, `L`/`W`/`#`.

use super::ValidationResult;
use crate::fields::{is_plain_number, CronFields, FieldKind};
use crate::weekday::DAY_CODES;

const MONTH_NAMES: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

pub(super) fn validate_fields(fields: &CronFields<'_>, result: &mut ValidationResult) {
    for (kind, value) in fields.iter() {
        if let Err(reason) = check_field(kind, value) {
            result.error(
                format!("cron.{}", kind.name()),
                format!("Invalid cron {} field '{value}': {reason}", kind.name()),
            );
        }
    }
}

/// Quartz needs exactly one of day-of-month / day-of-week to be `?`.
pub(super) fn validate_day_exclusivity(fields: &CronFields<'_>, result: &mut ValidationResult) {
    match (fields.day_of_month == "?", fields.day_of_week == "?") {
        (true, true) => result.error("cron", "day_of_month and day_of_week cannot both be '?'"),
        (false, false) => result.error(
            "cron",
            "one of day_of_month or day_of_week must be '?'",
        ),
        _ => {}
    }
}

/// Digits in day-of-week are 1-based in Quartz but 0-based in the simple
/// editor, so flag them.
pub(super) fn warn_numeric_weekdays(fields: &CronFields<'_>, result: &mut ValidationResult) {
    let numeric = fields.day_of_week.split(',').any(|part| {
        part.split(|c: char| c == '#' || c == '/')
            .next()
            .is_some_and(|days| days.bytes().any(|b| b.is_ascii_digit()))
    });
    if numeric {
        result.warn(
            "cron.day_of_week",
            "numeric days use Quartz numbering (1 = SUN, 7 = SAT); prefer SUN..SAT",
        );
    }
}

fn check_field(kind: FieldKind, field: &str) -> Result<(), String> {
    if field == "?" {
        return if kind.allows_no_specific_value() {
            Ok(())
        } else {
            Err("'?' is only allowed in day_of_month and day_of_week".to_string())
        };
    }
    field.split(',').try_for_each(|part| check_part(kind, part))
}

fn check_part(kind: FieldKind, part: &str) -> Result<(), String> {
    if part.is_empty() {
        return Err("empty list element".to_string());
    }
    let upper = part.to_ascii_uppercase();
    let part = upper.as_str();

    let special = match kind {
        FieldKind::DayOfMonth => check_last_or_weekday(part),
        FieldKind::DayOfWeek => check_last_or_nth(part),
        _ => None,
    };
    if let Some(outcome) = special {
        return outcome;
    }

    let (range, step) = match part.split_once('/') {
        Some((range, step)) => (range, Some(step)),
        None => (part, None),
    };
    if let Some(step) = step {
        check_step(kind, step)?;
    }

    if range == "*" {
        return Ok(());
    }

    match range.split_once('-') {
        Some((start, end)) => {
            let start = value_of(kind, start)?;
            let end = value_of(kind, end)?;
            if start > end {
                return Err(format!("range '{range}' runs backwards"));
            }
            Ok(())
        }
        None => value_of(kind, range).map(|_| ()),
    }
}

fn check_step(kind: FieldKind, step: &str) -> Result<(), String> {
    let (min, max) = kind.bounds();
    let span = max - min + 1;
    match step.parse::<u32>() {
        Ok(v) if is_plain_number(step) && (1..=span).contains(&v) => Ok(()),
        _ => Err(format!("step '{step}' must be between 1 and {span}")),
    }
}

/// Numeric value of a single token, names resolved, bounds checked.
fn value_of(kind: FieldKind, token: &str) -> Result<u32, String> {
    let (min, max) = kind.bounds();
    let value = if is_plain_number(token) {
        token
            .parse::<u32>()
            .map_err(|_| format!("'{token}' is outside {min}-{max}"))?
    } else {
        named_value(kind, token)
            .ok_or_else(|| format!("'{token}' is not a number or a known name"))?
    };
    if value < min || value > max {
        return Err(format!("{value} is outside {min}-{max}"));
    }
    Ok(value)
}

fn named_value(kind: FieldKind, token: &str) -> Option<u32> {
    let names: &[&str] = match kind {
        FieldKind::Month => &MONTH_NAMES,
        FieldKind::DayOfWeek => &DAY_CODES,
        _ => return None,
    };
    names
        .iter()
        .position(|name| *name == token)
        .map(|index| index as u32 + 1)
}

/// `L`, `LW`, `L-N`, `NW`.
fn check_last_or_weekday(part: &str) -> Option<Result<(), String>> {
    if part == "L" || part == "LW" {
        return Some(Ok(()));
    }
    if let Some(offset) = part.strip_prefix("L-") {
        return Some(match offset.parse::<u32>() {
            Ok(v) if is_plain_number(offset) && v <= 30 => Ok(()),
            _ => Err(format!("offset '{offset}' from last day must be 0-30")),
        });
    }
    part.strip_suffix('W')
        .map(|day| value_of(FieldKind::DayOfMonth, day).map(|_| ()))
}

/// `L`, `NL`, `N#K`.
fn check_last_or_nth(part: &str) -> Option<Result<(), String>> {
    if part == "L" {
        return Some(Ok(()));
    }
    if let Some((day, nth)) = part.split_once('#') {
        return Some(value_of(FieldKind::DayOfWeek, day).and_then(|_| {
            match nth.parse::<u32>() {
                Ok(1..=5) if is_plain_number(nth) => Ok(()),
                _ => Err(format!("occurrence '{nth}' must be 1-5")),
            }
        }));
    }
    part.strip_suffix('L')
        .map(|day| value_of(FieldKind::DayOfWeek, day).map(|_| ()))
}
