//! Equation batch domain: item type, request-text parsing, sanitization.

mod errors;
mod item;
pub mod parser;
pub mod sanitizer;

pub use errors::{ParseError, SanitizeError};
pub use item::EquationItem;
pub use parser::{parse_jsonl_mode, parse_text_mode};
pub use sanitizer::sanitize_item;
