//! Subcommand execution. Each command builds a serializable report; the
//! caller decides how to print it.

use std::fmt;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{Datelike, Utc};
use serde::Serialize;
use tracing::debug;

use cronform_schedule::interval::{clamp_hour, clamp_minute};
use cronform_schedule::{
    build_cron_string, is_simple_convertible, parse_cron_string, validate_cron, ClockPeriod,
    CronAtoms, EditorMode, FieldKind, IntervalSchedule, ModeSwitch, SimpleScheduleSpec,
    ValidationResult, WeekdaySelection,
};

use crate::cli::Command;
use crate::output::{print_report, OutputFormat};

/// Run a subcommand. Returns a failure exit code when the expression under
/// test does not validate.
pub fn execute(command: Command, format: OutputFormat) -> Result<ExitCode> {
    match command {
        Command::Build {
            minute,
            hour,
            days,
            all_days,
        } => {
            let days = match (all_days, days.as_deref()) {
                (true, _) | (false, None) => WeekdaySelection::all(),
                (false, Some(list)) => WeekdaySelection::from_codes(list)
                    .with_context(|| format!("invalid --days '{list}'"))?,
            };
            let report = build_report(SimpleScheduleSpec {
                minute,
                hour,
                day_of_week: days,
            });
            print_report(&report, format)?;
            Ok(exit_code(report.validation.valid))
        }
        Command::Parse { cron } => {
            print_report(&parse_report(&cron), format)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { cron } => {
            let report = check_report(&cron);
            print_report(&report, format)?;
            Ok(exit_code(report.validation.valid))
        }
        Command::Interval {
            minute,
            hour,
            period,
            every_days,
            every_months,
            every_years,
        } => {
            let period = ClockPeriod::from(period);
            let schedule = IntervalSchedule {
                minute: clamp_minute(minute),
                hour: clamp_hour(hour, period),
                period,
                every_days,
                every_months,
                every_years,
            };
            let report = interval_report(&schedule, Utc::now().year());
            print_report(&report, format)?;
            Ok(exit_code(report.validation.valid))
        }
        Command::Set { field, value, cron } => {
            let report = set_report(&cron, field.into(), &value);
            print_report(&report, format)?;
            Ok(exit_code(report.validation.valid))
        }
        Command::Mode {
            from,
            to,
            confirm,
            cron,
        } => {
            let report = mode_report(from.into(), to.into(), &cron, confirm);
            print_report(&report, format)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn exit_code(valid: bool) -> ExitCode {
    if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

// ── Reports ─────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct BuildReport {
    pub cron: String,
    pub validation: ValidationResult,
}

pub fn build_report(spec: SimpleScheduleSpec) -> BuildReport {
    let cron = build_cron_string(&spec);
    debug!(%cron, "built cron expression");
    BuildReport {
        validation: validate_cron(&cron),
        cron,
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseReport {
    pub cron: String,
    pub simple: SimpleScheduleSpec,
    pub convertible: bool,
}

pub fn parse_report(cron: &str) -> ParseReport {
    ParseReport {
        cron: cron.trim().to_string(),
        simple: parse_cron_string(cron),
        convertible: is_simple_convertible(cron),
    }
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub cron: String,
    pub convertible: bool,
    pub validation: ValidationResult,
}

pub fn check_report(cron: &str) -> CheckReport {
    CheckReport {
        cron: cron.trim().to_string(),
        convertible: is_simple_convertible(cron),
        validation: validate_cron(cron),
    }
}

#[derive(Debug, Serialize)]
pub struct IntervalReport {
    pub schedule: IntervalSchedule,
    pub cron: String,
    pub validation: ValidationResult,
}

pub fn interval_report(schedule: &IntervalSchedule, current_year: i32) -> IntervalReport {
    let cron = schedule.to_cron_string(current_year);
    IntervalReport {
        schedule: *schedule,
        validation: validate_cron(&cron),
        cron,
    }
}

#[derive(Debug, Serialize)]
pub struct SetReport {
    pub cron: String,
    pub fields: CronAtoms,
    pub validation: ValidationResult,
}

pub fn set_report(cron: &str, kind: FieldKind, value: &str) -> SetReport {
    let mut fields = CronAtoms::from_expression(cron);
    fields.set(kind, value);
    let cron = fields.to_expression();
    debug!(%cron, field = kind.name(), "replaced field");
    SetReport {
        validation: validate_cron(&cron),
        fields,
        cron,
    }
}

#[derive(Debug, Serialize)]
pub struct ModeReport {
    pub outcome: ModeSwitch,
    pub mode: EditorMode,
    /// What simple mode will show, once the editor is in it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simple: Option<SimpleScheduleSpec>,
}

pub fn mode_report(from: EditorMode, to: EditorMode, cron: &str, confirm: bool) -> ModeReport {
    let mut outcome = from.request_switch(to, cron);
    if confirm {
        outcome = outcome.confirm();
    }
    let mode = outcome.mode();
    ModeReport {
        outcome,
        mode,
        simple: (mode == EditorMode::Simple).then(|| parse_cron_string(cron)),
    }
}

// ── Text rendering ──────────────────────────────────────────────────

fn write_validation(f: &mut fmt::Formatter<'_>, validation: &ValidationResult) -> fmt::Result {
    writeln!(f, "valid: {}", yes_no(validation.valid))?;
    for error in &validation.errors {
        writeln!(f, "  error [{}] {}", error.path, error.message)?;
    }
    for warning in &validation.warnings {
        writeln!(f, "  warning [{}] {}", warning.path, warning.message)?;
    }
    Ok(())
}

fn write_simple(f: &mut fmt::Formatter<'_>, simple: &SimpleScheduleSpec) -> fmt::Result {
    writeln!(f, "minute: {}", optional(simple.minute))?;
    writeln!(f, "hour: {}", optional(simple.hour))?;
    writeln!(f, "days: {}", simple.day_of_week)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn optional(value: Option<u32>) -> String {
    value.map_or_else(|| "unset".to_string(), |v| v.to_string())
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.cron)?;
        write_validation(f, &self.validation)
    }
}

impl fmt::Display for ParseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_simple(f, &self.simple)?;
        writeln!(f, "convertible: {}", yes_no(self.convertible))
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cron: {}", self.cron)?;
        writeln!(f, "convertible: {}", yes_no(self.convertible))?;
        write_validation(f, &self.validation)
    }
}

impl fmt::Display for IntervalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.cron)?;
        write_validation(f, &self.validation)
    }
}

impl fmt::Display for SetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.cron)?;
        write_validation(f, &self.validation)
    }
}

impl fmt::Display for ModeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            ModeSwitch::Unchanged(mode) => writeln!(f, "already in {mode:?} mode")?,
            ModeSwitch::Switched(mode) => writeln!(f, "switched to {mode:?} mode")?,
            ModeSwitch::NeedsConfirmation { from, to } => writeln!(
                f,
                "staying in {from:?} mode: switching to {to:?} may lose schedule detail (pass --confirm)"
            )?,
        }
        if let Some(simple) = &self.simple {
            write_simple(f, simple)?;
        }
        Ok(())
    }
}
