// ============================================================================
// Calculator Factory
// Creates calculators with proper configuration
// ============================================================================

use crate::domain::config::CalculatorConfig;
use crate::engine::Calculator;
use crate::interfaces::EvaluationObserver;
use crate::numeric::Operand;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from configuration
///
/// # Arguments
/// * `config` - Calculator configuration
/// * `observer` - Observer for evaluations
///
/// # Returns
/// * `Result<Calculator<T>, String>` - Configured calculator or error
///
/// # Example
/// ```
/// use arithmetic::prelude::*;
/// use std::sync::Arc;
///
/// let config = CalculatorConfig::traced("ledger".to_string());
/// let calc: Calculator<i64> = create_from_config(config, Arc::new(NoOpObserver)).unwrap();
/// assert_eq!(calc.add(2, 3), 5);
/// ```
pub fn create_from_config<T: Operand>(
    config: CalculatorConfig,
    observer: Arc<dyn EvaluationObserver<T>>,
) -> Result<Calculator<T>, String> {
    config.validate()?;

    tracing::debug!(
        calculator = %config.label,
        notify_observer = config.notify_observer,
        "creating calculator"
    );

    Ok(Calculator::new(config.label, observer).with_notifications(config.notify_observer))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use arithmetic::prelude::*;
/// use std::sync::Arc;
///
/// let calc: Calculator<f64> = CalculatorBuilder::new("pricing")
///     .with_notifications(false)
///     .build(Arc::new(NoOpObserver))
///     .unwrap();
/// assert_eq!(calc.divide(7.0, 2.0), Ok(3.5));
/// ```
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a new builder with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            config: CalculatorConfig::new(label.into()),
        }
    }

    /// Enable or disable observer notifications
    pub fn with_notifications(mut self, enabled: bool) -> Self {
        self.config = self.config.with_notifications(enabled);
        self
    }

    /// Preset: calculator that never calls its observer
    pub fn quiet(label: impl Into<String>) -> Self {
        Self {
            config: CalculatorConfig::quiet(label.into()),
        }
    }

    /// Preset: calculator that forwards every evaluation
    pub fn traced(label: impl Into<String>) -> Self {
        Self {
            config: CalculatorConfig::traced(label.into()),
        }
    }

    /// Build the calculator
    pub fn build<T: Operand>(
        self,
        observer: Arc<dyn EvaluationObserver<T>>,
    ) -> Result<Calculator<T>, String> {
        create_from_config(self.config, observer)
    }

    /// Get the configuration (for inspection)
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }
}
