// ============================================================================
// Operation
// The four arithmetic operations as a value type
// ============================================================================

use crate::numeric::{self, ArithmeticResult, Operand};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the four arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    /// The only operation that can fail (zero divisor)
    Divide,
}

impl Operation {
    /// All operations, in declaration order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Apply this operation to a pair of operands.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for `Divide` with a zero `rhs`. The other
    /// operations always succeed.
    ///
    /// # Example
    /// ```
    /// use arithmetic::domain::Operation;
    ///
    /// assert_eq!(Operation::Multiply.apply(5, 2), Ok(10));
    /// assert!(Operation::Divide.apply(5, 0).is_err());
    /// ```
    #[inline]
    pub fn apply<T: Operand>(self, lhs: T, rhs: T) -> ArithmeticResult<T> {
        match self {
            Operation::Add => Ok(numeric::add(lhs, rhs)),
            Operation::Subtract => Ok(numeric::subtract(lhs, rhs)),
            Operation::Multiply => Ok(numeric::multiply(lhs, rhs)),
            Operation::Divide => numeric::divide(lhs, rhs),
        }
    }

    /// Infix symbol: `+`, `-`, `*` or `/`.
    pub const fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }

    /// Lowercase name, matching the free function.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// True when swapping the operands never changes the result.
    pub const fn is_commutative(self) -> bool {
        matches!(self, Operation::Add | Operation::Multiply)
    }

    /// True if the operation can return an error.
    pub const fn is_fallible(self) -> bool {
        matches!(self, Operation::Divide)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::ArithmeticError;
    use proptest::prelude::*;

    #[test]
    fn test_apply_matches_scenarios() {
        assert_eq!(Operation::Add.apply(2, 3), Ok(5));
        assert_eq!(Operation::Subtract.apply(10, 7), Ok(3));
        assert_eq!(Operation::Divide.apply(10, 5), Ok(2));
        assert_eq!(Operation::Multiply.apply(5, 2), Ok(10));
    }

    #[test]
    fn test_only_divide_fails() {
        for op in Operation::ALL {
            let result = op.apply(1i64, 0);
            assert_eq!(result.is_err(), op.is_fallible(), "{op}");
        }
        assert_eq!(
            Operation::Divide.apply(1i64, 0),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    fn test_symbols_and_names() {
        let symbols: String = Operation::ALL.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols, "+-*/");
        assert_eq!(Operation::Subtract.to_string(), "subtract");
        assert_eq!(Operation::Divide.name(), "divide");
    }

    #[test]
    fn test_commutativity_flags() {
        assert!(Operation::Add.is_commutative());
        assert!(Operation::Multiply.is_commutative());
        assert!(!Operation::Subtract.is_commutative());
        assert!(!Operation::Divide.is_commutative());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_operation_serde() {
        let json = serde_json::to_string(&Operation::Multiply).unwrap();
        assert_eq!(json, "\"Multiply\"");
        let back: Operation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Operation::Multiply);
    }

    proptest! {
        #[test]
        fn prop_apply_agrees_with_free_functions(a in any::<i32>(), b in any::<i32>()) {
            prop_assert_eq!(Operation::Add.apply(a, b), Ok(numeric::add(a, b)));
            prop_assert_eq!(Operation::Subtract.apply(a, b), Ok(numeric::subtract(a, b)));
            prop_assert_eq!(Operation::Multiply.apply(a, b), Ok(numeric::multiply(a, b)));
            prop_assert_eq!(Operation::Divide.apply(a, b), numeric::divide(a, b));
        }

        #[test]
        fn prop_commutative_ops_ignore_operand_order(a in any::<i64>(), b in any::<i64>()) {
            for op in Operation::ALL.into_iter().filter(|op| op.is_commutative()) {
                prop_assert_eq!(op.apply(a, b), op.apply(b, a));
            }
        }
    }
}
