//! Schedule translation for the alert and subscription-group editors.
//!
//! This crate provides:
//! - Translation between a "simple" weekday/time schedule and Quartz CRON text
//! - A representability check that guards the Simple ⇄ Advanced editor toggle
//! - Field-by-field editing of an expression (Quartz or 5-field Unix)
//! - Repeat-interval CRON builder with 12h clock handling
//! - Quartz grammar validation with structured, path-addressed errors
//!
//! Everything here is pure and synchronous. Translation never fails: malformed
//! input degrades to defaults so half-typed text cannot break the editor.

pub mod atoms;
pub mod error;
pub mod fields;
pub mod interval;
pub mod mode;
pub mod simple;
pub mod validation;
pub mod weekday;

pub use atoms::{with_field, CronAtoms};
pub use error::CronError;
pub use fields::{CronFields, FieldKind};
pub use interval::{ClockPeriod, IntervalSchedule};
pub use mode::{EditorMode, ModeSwitch};
pub use simple::{build_cron_string, is_simple_convertible, parse_cron_string, SimpleScheduleSpec};
pub use validation::{is_valid_cron, validate_cron, ValidationResult};
pub use weekday::{parse_day_candidate, WeekdaySelection, DAY_CODES};
