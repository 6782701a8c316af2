//! Equation item value type.

use serde::{Deserialize, Serialize};

/// A single equation in a batch: math markup plus presentation metadata.
///
/// Items are immutable values. Sanitization does not mutate an item in
/// place; it produces a new one (see [`super::sanitizer::sanitize_item`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquationItem {
    /// Identifier, unique within a batch.
    pub id: String,
    /// Math-language source (LaTeX).
    pub latex: String,
    /// Inline rendering if true, numbered display block if false.
    #[serde(default)]
    pub inline: bool,
    /// Optional caption rendered under the equation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl EquationItem {
    /// Creates a display-mode item with no caption.
    pub fn display(id: impl Into<String>, latex: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            latex: latex.into(),
            inline: false,
            caption: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_constructor_sets_defaults() {
        let item = EquationItem::display("eq001", "x = 1");
        assert_eq!(item.id, "eq001");
        assert_eq!(item.latex, "x = 1");
        assert!(!item.inline);
        assert!(item.caption.is_none());
    }

    #[test]
    fn deserializes_with_defaults() {
        let item: EquationItem = serde_json::from_str(r#"{"id":"a","latex":"x"}"#).unwrap();
        assert!(!item.inline);
        assert!(item.caption.is_none());
    }
}
