// ============================================================================
// Evaluation
// Record of one operation applied to a pair of operands
// ============================================================================

use super::operation::Operation;
use crate::numeric::{ArithmeticResult, Operand};
use chrono::{DateTime, Utc};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One application of an `Operation`, together with its outcome.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Evaluation<T> {
    pub operation: Operation,
    pub lhs: T,
    pub rhs: T,
    pub outcome: ArithmeticResult<T>,
    pub timestamp: DateTime<Utc>,
}

impl<T: Operand> Evaluation<T> {
    /// Apply `operation` to `lhs` and `rhs` and record the outcome
    pub fn new(operation: Operation, lhs: T, rhs: T) -> Self {
        Self::with_outcome(operation, lhs, rhs, operation.apply(lhs, rhs))
    }

    /// Record an outcome the caller has already computed
    pub(crate) fn with_outcome(
        operation: Operation,
        lhs: T,
        rhs: T,
        outcome: ArithmeticResult<T>,
    ) -> Self {
        Self {
            operation,
            lhs,
            rhs,
            outcome,
            timestamp: Utc::now(),
        }
    }

    /// True if the operation produced a value
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The produced value, if any
    #[inline]
    pub fn value(&self) -> Option<T> {
        self.outcome.ok()
    }
}

impl<T: Operand> fmt::Display for Evaluation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} = ", self.lhs, self.operation.symbol(), self.rhs)?;
        match &self.outcome {
            Ok(value) => write!(f, "{}", value),
            Err(err) => write!(f, "error: {}", err),
        }
    }
}
