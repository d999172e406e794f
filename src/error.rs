use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("cannot divide by zero")]
    DivisionByZero,
    #[error("result out of range")]
    Overflow,
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CalcError {
    /// Errors raised by an engine operation that leave the state untouched and
    /// should be shown to the user rather than abort the session.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, CalcError::DivisionByZero | CalcError::Overflow)
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
