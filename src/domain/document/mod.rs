//! TeX document assembly from sanitized equation batches.

mod assembler;
mod escape;

pub use assembler::{build_document, build_document_at};
pub use escape::{label_safe, latex_escape};
