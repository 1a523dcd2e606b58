// ============================================================================
// Numeric Module
// Total arithmetic over native numeric types
// ============================================================================
//
// This module provides:
// - add/subtract/multiply/divide: the four arithmetic operations
// - Operand: the numeric types those operations accept
// - ArithmeticError: the single failure kind (division by zero)
//
// Design principles:
// - add, subtract and multiply are total and never panic
// - divide returns Result and fails only on a zero divisor
// - Native semantics per type: integers wrap and truncate, floats follow
//   IEEE-754, Decimal saturates

mod errors;
mod operand;
mod operations;

pub use errors::{ArithmeticError, ArithmeticResult};
pub use operand::Operand;
pub use operations::{add, divide, multiply, subtract};
