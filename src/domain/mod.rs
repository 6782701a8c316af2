//! Domain layer containing the core parsing, sanitization and assembly
//! logic.
//!
//! # Module Organization
//!
//! - `equation` - Equation item type, input parsing, markup sanitization
//! - `document` - TeX document assembly and text escaping

pub mod document;
pub mod equation;
