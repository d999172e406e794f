//! Domain types of the calculator: numbers, operands, operators, the state
//! record, the result formatter and the rendering port.

pub mod formatter;
pub mod number;
pub mod operand;
pub mod operator;
pub mod ports;
pub mod state;
