use crate::config::EngineConfig;
use crate::domain::formatter::{DisplayFormat, format_display, format_result};
use crate::domain::number::Number;
use crate::domain::operand::Operand;
use crate::domain::operator::Operator;
use crate::domain::ports::DisplayView;
use crate::domain::state::{CalculatorState, LastResult};
use crate::error::{CalcError, Result};
use rust_decimal::Decimal;

/// The calculator's input/evaluation state machine.
///
/// `CalculatorEngine` owns a single [`CalculatorState`] and mutates it in
/// response to keypad operations. Invalid input is ignored rather than
/// reported; only evaluation can fail, and a failed evaluation leaves the
/// state exactly as it was.
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    state: CalculatorState,
    config: EngineConfig,
    has_input: bool,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl CalculatorEngine {
    /// Creates an engine in its initial state (`"0"`, nothing pending).
    pub fn new(config: EngineConfig) -> Self {
        Self {
            state: CalculatorState::new(),
            config,
            has_input: false,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Whether a digit was typed since the last clear.
    pub fn has_input(&self) -> bool {
        self.has_input
    }

    /// Label for the clear key: `C` once something was typed, `AC` otherwise.
    pub fn clear_label(&self) -> &'static str {
        if self.has_input { "C" } else { "AC" }
    }

    /// Appends a digit to the current operand.
    ///
    /// Non-digit characters and digits past the configured cap are ignored.
    pub fn append_digit(&mut self, digit: char) {
        if !digit.is_ascii_digit() {
            tracing::trace!(%digit, "ignoring non-digit input");
            return;
        }

        self.state.begin_fresh_operand_if_pending();

        if self.state.current_operand.digit_count() >= self.config.max_digits {
            tracing::trace!(max = self.config.max_digits, "digit cap reached");
            return;
        }

        self.state.current_operand.push_digit(digit);
        self.has_input = true;
    }

    pub fn append_decimal_point(&mut self) {
        self.state.begin_fresh_operand_if_pending();
        if self.state.current_operand.has_decimal_point() {
            return;
        }
        self.state.current_operand.push_decimal_point();
    }

    pub fn toggle_sign(&mut self) {
        if self.state.current_operand.is_zero_literal() {
            return;
        }
        self.state.current_operand.toggle_sign();
    }

    /// Divides the current operand by 100.
    pub fn convert_to_percentage(&mut self) {
        let Some(value) = self.state.current_operand.parse() else {
            tracing::trace!(operand = %self.state.current_operand, "unparseable operand");
            return;
        };
        match Operator::Divide.apply(value, Number::Exact(Decimal::ONE_HUNDRED)) {
            Ok(Number::Exact(percent)) => {
                self.state.current_operand = Operand::from_decimal(percent);
            }
            Ok(percent) => {
                self.state.current_operand = Operand::from_formatted(format_result(
                    percent,
                    self.config.max_fraction_digits,
                ));
            }
            Err(e) => tracing::trace!(error = %e, "percentage not representable"),
        }
    }

    pub fn delete_last_character(&mut self) {
        self.state.current_operand.pop();
    }

    /// Makes `op` the pending operator.
    ///
    /// An operator that is already pending is evaluated first, which chains
    /// operations strictly left to right. If that evaluation fails the error
    /// is returned and nothing changes.
    pub fn choose_operation(&mut self, op: Operator) -> Result<()> {
        if self.state.current_operand.is_empty() {
            return Ok(());
        }

        if !self.state.previous_operand.is_empty() {
            self.evaluate()?;
        }

        self.state.operation = Some(op);
        self.state.previous_operand = self.state.current_operand.clone();
        self.state.should_reset_screen = true;
        Ok(())
    }

    /// Resolves the pending operation.
    ///
    /// Without a pending operation this does nothing, unless
    /// `repeat_last_operation` is enabled and a previous result exists, in
    /// which case the last operator and right-hand operand are applied to the
    /// current operand again.
    pub fn evaluate(&mut self) -> Result<()> {
        let Some((lhs, op, rhs)) = self.operands_for_evaluation() else {
            return Ok(());
        };

        let result = op.apply(lhs, rhs).inspect_err(|e| {
            tracing::warn!(%lhs, %op, %rhs, error = %e, "evaluation rejected");
        })?;

        // Rounding to five significant digits can push a result near the
        // float limit out of range; such text must never become an operand.
        let formatted =
            Operand::from_formatted(format_result(result, self.config.max_fraction_digits));
        if formatted.parse().is_none() {
            tracing::warn!(%lhs, %op, %rhs, %formatted, "formatted result is not representable");
            return Err(CalcError::Overflow);
        }

        self.state.last_result = Some(LastResult {
            operand: rhs,
            operation: op,
            result,
        });
        self.state.current_operand = formatted;
        self.state.operation = None;
        self.state.previous_operand = Operand::empty();
        self.state.should_reset_screen = true;

        tracing::debug!(%lhs, %op, %rhs, result = %self.state.current_operand, "evaluated");
        Ok(())
    }

    fn operands_for_evaluation(&self) -> Option<(Number, Operator, Number)> {
        let current = self.state.current_operand.parse()?;
        match self.state.pending() {
            Some((previous, op)) => Some((previous.parse()?, op, current)),
            None if self.config.repeat_last_operation => self
                .state
                .last_result
                .map(|last| (current, last.operation, last.operand)),
            None => None,
        }
    }

    /// Returns the engine to its initial state.
    pub fn clear(&mut self) {
        self.state.reset();
        self.has_input = false;
    }

    /// The formatted screen contents.
    pub fn display(&self) -> DisplayView {
        let format = self.display_format();
        let history = self.state.pending().map(|(previous, op)| {
            let mut previous = format_display(previous, &format);
            previous.push(' ');
            previous.push(op.symbol());
            previous
        });
        DisplayView {
            current: format_display(&self.state.current_operand, &format),
            history,
        }
    }

    /// The formatted operand line alone.
    pub fn display_string(&self) -> String {
        self.display().current
    }

    fn display_format(&self) -> DisplayFormat {
        DisplayFormat {
            grouping_separator: self.config.grouping_separator,
            display_width: self.config.display_width,
        }
    }
}
