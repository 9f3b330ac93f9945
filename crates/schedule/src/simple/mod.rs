//! Translation between the simple weekday/time schedule and CRON text.
//!
//! The simple editor shows a minute, an hour, and seven weekday checkboxes.
//! [`build_cron_string`] turns that into a 7-field Quartz expression,
//! [`parse_cron_string`] reads an expression back into the same shape, and
//! [`is_simple_convertible`] decides whether an expression survives that
//! round trip without losing detail.
//!
//! None of these functions fail. Text that cannot be read is left unset or
//! skipped, since they run on every keystroke of a live form.

mod build;
mod convertible;
mod parse;
mod spec;


pub use self::build::build_cron_string;
pub use self::convertible::is_simple_convertible;
pub use self::parse::parse_cron_string;
pub use self::spec::SimpleScheduleSpec;
