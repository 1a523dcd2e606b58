// ============================================================================
// Arithmetic Library
// Total, generic arithmetic with a checked division-by-zero guard
// ============================================================================

//! # Arithmetic
//!
//! Four arithmetic operations over native numeric types.
//!
//! ## Features
//!
//! - **add / subtract / multiply** are total: integers wrap, floats follow
//!   IEEE-754, `Decimal` saturates. None of them panic.
//! - **divide** returns `Err(ArithmeticError::DivisionByZero)` for a zero
//!   divisor. Integers truncate, floats and `Decimal` divide exactly.
//! - **Calculator** front end with pluggable evaluation observers
//!   (no-op, `tracing` logging, or your own)
//!
//! ## Example
//!
//! ```rust
//! use arithmetic::prelude::*;
//! use std::sync::Arc;
//!
//! assert_eq!(add(2, 3), 5);
//! assert_eq!(divide(10, 5), Ok(2));
//! assert_eq!(divide(1, 0), Err(ArithmeticError::DivisionByZero));
//!
//! // Calculator that logs every evaluation through `tracing`
//! let calc: Calculator<f64> = Calculator::new(
//!     "pricing".to_string(),
//!     Arc::new(LoggingObserver),
//! );
//!
//! assert_eq!(calc.evaluate(Operation::Divide, 7.0, 2.0), Ok(3.5));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{CalculatorConfig, Evaluation, Operation};
    pub use crate::engine::{create_from_config, Calculator, CalculatorBuilder};
    pub use crate::interfaces::{EvaluationObserver, LoggingObserver, NoOpObserver};
    pub use crate::numeric::{
        add, divide, multiply, subtract, ArithmeticError, ArithmeticResult, Operand,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::Arc;

    #[test]
    fn test_add() {
        assert_eq!(5, add(2, 3));
    }

    #[test]
    fn test_subtract() {
        assert_eq!(3, subtract(10, 7));
    }

    #[test]
    fn test_divide() {
        assert_eq!(Ok(2), divide(10, 5));
    }

    #[test]
    fn test_multiply() {
        assert_eq!(10, multiply(5, 2));
    }

    #[test]
    fn test_end_to_end_calculator() {
        let calc: Calculator<i64> = CalculatorBuilder::traced("integration")
            .build(Arc::new(LoggingObserver))
            .unwrap();

        let results = calc.evaluate_batch(&[
            (Operation::Add, 2, 3),
            (Operation::Subtract, 10, 7),
            (Operation::Divide, 10, 5),
            (Operation::Multiply, 5, 2),
            (Operation::Divide, 10, 0),
        ]);

        assert_eq!(
            results,
            vec![
                Ok(5),
                Ok(3),
                Ok(2),
                Ok(10),
                Err(ArithmeticError::DivisionByZero)
            ]
        );
    }
}
