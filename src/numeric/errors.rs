// ============================================================================
// Arithmetic Errors
// Error type for the arithmetic operations
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur during arithmetic operations.
///
/// Only `divide` can fail; every other operation is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArithmeticError {
    /// Attempted division by zero
    DivisionByZero,
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// Result type alias for arithmetic operations
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;
