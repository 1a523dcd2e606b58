// ============================================================================
// Utilities Module
// Helpers for the executables built on top of the library
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(test)]
pub(crate) mod capture;

#[cfg(feature = "logging")]
pub use logging::init_logging;
