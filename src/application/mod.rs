//! Application layer containing the calculator's state machine.
//!
//! This module defines the `CalculatorEngine`, the single entry point every
//! input adapter calls into. It is synchronous and owns its state outright, so
//! independent calculators are just independent values.

pub mod engine;
