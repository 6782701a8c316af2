//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

mod generate_document;

pub use generate_document::{DocxInput, GenerateDocumentHandler, GenerateError};
