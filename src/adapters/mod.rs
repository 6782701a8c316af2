//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `convert` - Pandoc subprocess converter
//! - `http` - REST API endpoint exposure

pub mod convert;
pub mod http;

pub use convert::PandocConverter;
