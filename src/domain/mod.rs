// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod config;
pub mod evaluation;
pub mod operation;

pub use config::CalculatorConfig;
pub use evaluation::Evaluation;
pub use operation::Operation;
