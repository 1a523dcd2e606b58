// ============================================================================
// Evaluation Observer Interface
// Defines the contract for observing calculator evaluations
// ============================================================================

use crate::domain::Evaluation;
use crate::numeric::Operand;

/// Observer trait for calculator evaluations.
/// Implementations can handle logging, metrics, auditing, etc.
///
/// Observers only watch: the calculator returns the outcome to its caller
/// regardless of what the observer does.
pub trait EvaluationObserver<T: Operand>: Send + Sync {
    /// Handle a single evaluation
    fn on_evaluation(&self, evaluation: &Evaluation<T>);

    /// Batch handler (optional optimization)
    fn on_evaluations(&self, evaluations: &[Evaluation<T>]) {
        for evaluation in evaluations {
            self.on_evaluation(evaluation);
        }
    }
}

/// No-op observer for testing
pub struct NoOpObserver;

impl<T: Operand> EvaluationObserver<T> for NoOpObserver {
    fn on_evaluation(&self, _evaluation: &Evaluation<T>) {
        // Do nothing
    }
}

/// Logging observer
pub struct LoggingObserver;

impl<T: Operand> EvaluationObserver<T> for LoggingObserver {
    fn on_evaluation(&self, evaluation: &Evaluation<T>) {
        match &evaluation.outcome {
            Ok(_) => tracing::debug!(
                operation = %evaluation.operation,
                "evaluated {}",
                evaluation
            ),
            Err(err) => tracing::warn!(
                operation = %evaluation.operation,
                lhs = %evaluation.lhs,
                rhs = %evaluation.rhs,
                "evaluation failed: {}",
                err
            ),
        }
    }
}
