use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CronError {
    #[error("cron expression must have 6 or 7 fields, got {got}")]
    FieldCount { got: usize },

    #[error("unknown day of week '{0}', expected one of SUN..SAT or 0-6")]
    UnknownDay(String),
}
