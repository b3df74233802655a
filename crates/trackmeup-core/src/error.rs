use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("invalid date {input:?}: {reason}")]
    DateParse { input: String, reason: String },

    #[error("invalid time range")]
    InvalidRange,
}
