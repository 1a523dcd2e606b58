// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod evaluation_observer;

pub use evaluation_observer::{EvaluationObserver, LoggingObserver, NoOpObserver};
