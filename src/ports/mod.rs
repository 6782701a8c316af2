//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DocumentConverter` - Port for TeX-to-docx conversion via an
//!   external process

mod document_converter;

pub use document_converter::{ConvertError, DocumentConverter};
