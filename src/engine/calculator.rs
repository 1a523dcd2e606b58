// ============================================================================
// Calculator
// Labelled front end over the pure operations with pluggable observation
// ============================================================================

use crate::domain::{Evaluation, Operation};
use crate::interfaces::EvaluationObserver;
use crate::numeric::{self, ArithmeticResult, Operand};
use std::sync::Arc;

/// Stateless calculator that reports evaluations to an observer.
///
/// Every method returns exactly what the underlying operation returns;
/// a `DivisionByZero` is handed back to the caller untouched.
pub struct Calculator<T: Operand> {
    /// Name used in log output
    label: Arc<String>,

    /// Whether evaluations reach the observer
    notify_observer: bool,

    /// Observer for evaluations
    observer: Arc<dyn EvaluationObserver<T>>,
}

impl<T: Operand> Calculator<T> {
    /// Create a new calculator with observer notifications enabled
    pub fn new(label: String, observer: Arc<dyn EvaluationObserver<T>>) -> Self {
        Self {
            label: Arc::new(label),
            notify_observer: true,
            observer,
        }
    }

    pub(crate) fn with_notifications(mut self, enabled: bool) -> Self {
        self.notify_observer = enabled;
        self
    }

    /// Apply `operation` to `lhs` and `rhs`
    pub fn evaluate(&self, operation: Operation, lhs: T, rhs: T) -> ArithmeticResult<T> {
        let outcome = operation.apply(lhs, rhs);
        self.record(operation, lhs, rhs, outcome);
        outcome
    }

    /// Evaluate each `(operation, lhs, rhs)` triple in order.
    ///
    /// The observer receives the whole batch in one call.
    pub fn evaluate_batch(&self, batch: &[(Operation, T, T)]) -> Vec<ArithmeticResult<T>> {
        tracing::trace!(calculator = %self.label, size = batch.len(), "evaluating batch");

        if !self.notify_observer {
            return batch
                .iter()
                .map(|&(operation, lhs, rhs)| operation.apply(lhs, rhs))
                .collect();
        }

        let evaluations: Vec<Evaluation<T>> = batch
            .iter()
            .map(|&(operation, lhs, rhs)| Evaluation::new(operation, lhs, rhs))
            .collect();
        self.observer.on_evaluations(&evaluations);
        evaluations.into_iter().map(|e| e.outcome).collect()
    }

    /// Returns `a + b`
    pub fn add(&self, a: T, b: T) -> T {
        let sum = numeric::add(a, b);
        self.record(Operation::Add, a, b, Ok(sum));
        sum
    }

    /// Returns `a - b`
    pub fn subtract(&self, a: T, b: T) -> T {
        let difference = numeric::subtract(a, b);
        self.record(Operation::Subtract, a, b, Ok(difference));
        difference
    }

    /// Returns `a * b`
    pub fn multiply(&self, a: T, b: T) -> T {
        let product = numeric::multiply(a, b);
        self.record(Operation::Multiply, a, b, Ok(product));
        product
    }

    /// Returns `a / b`, or `DivisionByZero` if `b` is zero
    pub fn divide(&self, a: T, b: T) -> ArithmeticResult<T> {
        self.evaluate(Operation::Divide, a, b)
    }

    /// Get the calculator label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether evaluations are forwarded to the observer
    pub fn notifies_observer(&self) -> bool {
        self.notify_observer
    }

    fn record(&self, operation: Operation, lhs: T, rhs: T, outcome: ArithmeticResult<T>) {
        tracing::trace!(
            calculator = %self.label,
            operation = %operation,
            lhs = %lhs,
            rhs = %rhs,
            ok = outcome.is_ok(),
            "evaluated"
        );

        if self.notify_observer {
            self.observer
                .on_evaluation(&Evaluation::with_outcome(operation, lhs, rhs, outcome));
        }
    }
}

impl<T: Operand> Clone for Calculator<T> {
    fn clone(&self) -> Self {
        Self {
            label: Arc::clone(&self.label),
            notify_observer: self.notify_observer,
            observer: Arc::clone(&self.observer),
        }
    }
}
