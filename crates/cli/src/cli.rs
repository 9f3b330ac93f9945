use clap::{Parser, Subcommand, ValueEnum};
use cronform_schedule::{ClockPeriod, EditorMode, FieldKind};

use crate::output::OutputFormat;

/// Translate, check and build Quartz CRON schedules for alerts and
/// subscription groups.
#[derive(Parser, Debug)]
#[command(name = "cronform", version, about)]
pub struct CliArgs {
    /// Output format (overrides config and CRONFORM_FORMAT)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Path to config file (default: ~/.config/cronform/config.toml)
    #[arg(long, global = true, env = "CRONFORM_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a CRON expression from a time of day and a set of weekdays
    Build {
        /// Minute of the hour (default 0)
        #[arg(long)]
        minute: Option<u32>,

        /// Hour of the day, 24h (default 0)
        #[arg(long)]
        hour: Option<u32>,

        /// Comma-separated weekdays, e.g. MON,WED,FRI or 1,3,5
        #[arg(long, conflicts_with = "all_days")]
        days: Option<String>,

        /// Fire on every day of the week
        #[arg(long)]
        all_days: bool,
    },

    /// Read a CRON expression into minute, hour and weekdays
    Parse {
        /// Quoted CRON expression, e.g. "0 15 10 ? * MON-THU *"
        cron: String,
    },

    /// Validate a CRON expression and report whether simple mode can show it
    Check {
        /// Quoted CRON expression
        cron: String,
    },

    /// Build a "repeat every N days/months/years" CRON expression
    Interval {
        /// Minute of the hour
        #[arg(long, default_value_t = 0)]
        minute: u32,

        /// Hour on the 12h clock
        #[arg(long, default_value_t = 0)]
        hour: u32,

        /// am or pm
        #[arg(long, value_enum, default_value_t = PeriodArg::Am)]
        period: PeriodArg,

        /// Repeat every N days
        #[arg(long)]
        every_days: Option<u32>,

        /// Repeat every N months
        #[arg(long)]
        every_months: Option<u32>,

        /// Repeat every N years, starting this year
        #[arg(long)]
        every_years: Option<u32>,
    },

    /// Replace one field of a CRON expression and validate the result
    Set {
        /// Field to replace
        #[arg(long, value_enum)]
        field: FieldArg,

        /// New field text; empty clears it
        #[arg(long, allow_hyphen_values = true)]
        value: String,

        /// Quoted CRON expression, Quartz or 5-field Unix
        cron: String,
    },

    /// Ask whether the editor may switch modes while holding an expression
    Mode {
        /// Current editor mode
        #[arg(long, value_enum)]
        from: ModeArg,

        /// Requested editor mode
        #[arg(long, value_enum)]
        to: ModeArg,

        /// Accept losing schedule detail if a prompt would be shown
        #[arg(long)]
        confirm: bool,

        /// Quoted CRON expression held by the editor
        cron: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PeriodArg {
    Am,
    Pm,
}

impl From<PeriodArg> for ClockPeriod {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Am => ClockPeriod::Am,
            PeriodArg::Pm => ClockPeriod::Pm,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Simple,
    Advanced,
}

impl From<ModeArg> for EditorMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Simple => EditorMode::Simple,
            ModeArg::Advanced => EditorMode::Advanced,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FieldArg {
    Second,
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
    Year,
}

impl From<FieldArg> for FieldKind {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Second => FieldKind::Second,
            FieldArg::Minute => FieldKind::Minute,
            FieldArg::Hour => FieldKind::Hour,
            FieldArg::DayOfMonth => FieldKind::DayOfMonth,
            FieldArg::Month => FieldKind::Month,
            FieldArg::DayOfWeek => FieldKind::DayOfWeek,
            FieldArg::Year => FieldKind::Year,
        }
    }
}
