use crate::error::Result;
use std::fmt;

/// What the screen shows: the operand line and, while an operator is
/// pending, a history line such as `7 +`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayView {
    pub current: String,
    pub history: Option<String>,
}

impl fmt::Display for DisplayView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.history {
            Some(history) => write!(f, "{} | {}", history, self.current),
            None => f.write_str(&self.current),
        }
    }
}

/// A display surface the engine's state is rendered onto.
pub trait Renderer {
    fn render(&mut self, view: &DisplayView) -> Result<()>;
    /// Shows a blocking, user-facing notification such as a division by zero.
    fn alert(&mut self, message: &str) -> Result<()>;
}
