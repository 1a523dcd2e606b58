// ============================================================================
// Calculator Configuration
// Settings for constructing a Calculator
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for creating a calculator
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Name used in log output (e.g., "ledger", "pricing")
    pub label: String,

    /// Whether evaluations are forwarded to the observer.
    /// When false the calculator is a thin wrapper over the pure operations.
    pub notify_observer: bool,
}

impl CalculatorConfig {
    /// Create a new configuration with observer notifications enabled
    pub fn new(label: String) -> Self {
        Self {
            label,
            notify_observer: true,
        }
    }

    /// Builder method: Enable or disable observer notifications
    pub fn with_notifications(mut self, enabled: bool) -> Self {
        self.notify_observer = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.label.trim().is_empty() {
            return Err("Label cannot be empty".to_string());
        }
        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CalculatorConfig {
    /// Calculator that never calls its observer
    pub fn quiet(label: String) -> Self {
        Self::new(label).with_notifications(false)
    }

    /// Calculator that forwards every evaluation to its observer
    pub fn traced(label: String) -> Self {
        Self::new(label).with_notifications(true)
    }
}
