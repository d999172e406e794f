use super::number::Number;
use super::operand::Operand;
use super::operator::Operator;
use serde::Serialize;

/// The most recent successful evaluation.
#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
pub struct LastResult {
    /// The right-hand operand that was applied.
    pub operand: Number,
    pub operation: Operator,
    pub result: Number,
}

/// Everything the calculator remembers between keystrokes.
///
/// `operation` is set exactly when `previous_operand` is non-empty.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct CalculatorState {
    /// The operand being typed or displayed.
    pub current_operand: Operand,
    /// Left-hand side of the pending operation, empty when none is pending.
    pub previous_operand: Operand,
    pub operation: Option<Operator>,
    /// The next digit starts a fresh operand instead of extending this one.
    pub should_reset_screen: bool,
    pub last_result: Option<LastResult>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_operand: Operand::zero(),
            previous_operand: Operand::empty(),
            operation: None,
            should_reset_screen: false,
            last_result: None,
        }
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets every field to its initial value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The pending operation, if both halves of it are present.
    pub fn pending(&self) -> Option<(&Operand, Operator)> {
        match self.operation {
            Some(op) if !self.previous_operand.is_empty() => Some((&self.previous_operand, op)),
            _ => None,
        }
    }

    /// Starts a fresh operand if the previous keystroke asked for it.
    pub fn begin_fresh_operand_if_pending(&mut self) {
        if self.should_reset_screen {
            self.current_operand = Operand::zero();
            self.should_reset_screen = false;
        }
    }
}
