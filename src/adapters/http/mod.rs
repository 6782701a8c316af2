//! HTTP adapters - REST API implementations.

pub mod equations;

// Re-export key types for convenience
pub use equations::equation_router;
pub use equations::EquationAppState;
