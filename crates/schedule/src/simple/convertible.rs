//! Can an expression be edited in simple mode without losing detail?

use tracing::debug;

use crate::fields::is_plain_number;

const EVERY: [&str; 2] = ["*", "?"];

/// `true` when the expression round-trips through the simple editor.
///
/// The expression is read positionally into seven slots (second, minute,
/// hour, day-of-month, month, day-of-week, year); missing slots stay empty
/// and tokens past the seventh are ignored. Then, field by field:
/// - day-of-month, month and year must be `*` or `?` (an empty slot is
///   neither, so 6-field expressions are not convertible);
/// - seconds must be exactly `0`;
/// - minute and hour must be plain base-10 numbers;
/// - day-of-week must not use step syntax (`/`).
pub fn is_simple_convertible(cron: &str) -> bool {
    let atoms: Vec<&str> = cron.split_whitespace().collect();
    let [second, minute, hour, day_of_month, month, day_of_week, year]: [Option<&str>; 7] =
        std::array::from_fn(|i| atoms.get(i).copied());

    if !is_every(day_of_month) || !is_every(month) || !is_every(year) {
        debug!(cron = %cron, "day-of-month, month or year is constrained");
        return false;
    }

    if second != Some("0") {
        return false;
    }

    if !minute.is_some_and(is_plain_number) || !hour.is_some_and(is_plain_number) {
        return false;
    }

    !day_of_week.is_some_and(|days| days.contains('/'))
}

fn is_every(field: Option<&str>) -> bool {
    field.is_some_and(|field| EVERY.iter().any(|every| *every == field))
}
