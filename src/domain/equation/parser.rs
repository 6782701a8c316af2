//! Request-text parsing into equation item batches.
//!
//! Two mutually exclusive input modes are supported:
//!
//! - **Text mode**: one display-mode expression per non-blank line.
//! - **Structured mode**: a JSON array of objects, or newline-delimited
//!   JSON objects (JSONL), one per line.
//!
//! All parser state (the id counter and the set of ids already assigned in
//! this batch) is local to a single call, so concurrent requests never
//! observe each other's counters.

use std::collections::HashSet;

use serde_json::Value;

use super::errors::ParseError;
use super::item::EquationItem;

/// Parses raw multi-line LaTeX text: one item per non-blank line.
///
/// Ids are assigned sequentially as `eq001`, `eq002`, … in encounter order
/// (the zero-padding widens naturally past 999). Every item is display
/// mode with no caption. This mode has no failure cases.
pub fn parse_text_mode(latex_text: &str) -> Vec<EquationItem> {
    let mut items = Vec::new();
    let mut counter = 1usize;
    for raw in latex_text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        items.push(EquationItem::display(format!("eq{counter:03}"), line));
        counter += 1;
    }
    items
}

/// Parses structured input: a JSON array if the trimmed text starts with
/// `[`, otherwise one JSON object per non-blank line.
///
/// Both shapes share the same per-element processing, so a malformed
/// element fails with the same error shape either way, with the 1-based
/// line number corresponding to the element's position.
pub fn parse_jsonl_mode(jsonl_text: &str) -> Result<Vec<EquationItem>, ParseError> {
    let mut items = Vec::new();
    let mut counter = 1usize;
    let mut seen_ids = HashSet::new();

    let text = jsonl_text.trim();
    if text.starts_with('[') {
        let data: Value = serde_json::from_str(text)
            .map_err(|e| ParseError::JsonArray(e.to_string()))?;
        let elements = data.as_array().ok_or(ParseError::ExpectedArray)?;
        for (ln, element) in elements.iter().enumerate() {
            items.push(item_from_value(ln + 1, element, &mut counter, &mut seen_ids)?);
        }
    } else {
        for (ln, raw) in jsonl_text.lines().enumerate() {
            let row = raw.trim();
            if row.is_empty() {
                continue;
            }
            let value: Value = serde_json::from_str(row).map_err(|e| ParseError::JsonLine {
                line: ln + 1,
                message: e.to_string(),
            })?;
            items.push(item_from_value(ln + 1, &value, &mut counter, &mut seen_ids)?);
        }
    }

    if items.is_empty() {
        return Err(ParseError::EmptyBatch);
    }
    Ok(items)
}

/// Builds one item from a parsed JSON value at 1-based position `line`.
///
/// The counter increments for every processed object, whether or not the
/// id was synthesized from it; collisions against ids already assigned in
/// this batch are resolved by appending successive letters `a`, `b`, …
fn item_from_value(
    line: usize,
    value: &Value,
    counter: &mut usize,
    seen_ids: &mut HashSet<String>,
) -> Result<EquationItem, ParseError> {
    let obj = value
        .as_object()
        .ok_or(ParseError::NotAnObject { line })?;

    let base = match obj.get("id").and_then(Value::as_str) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => format!("eq{:03}", *counter),
    };
    let mut id = base.clone();
    let mut suffix = 'a' as u32;
    while seen_ids.contains(&id) {
        // Mirrors the deterministic first-seen-order resolution: "a", then
        // "b", … appended to the colliding base.
        id = format!("{base}{}", char::from_u32(suffix).unwrap_or('a'));
        suffix += 1;
    }
    seen_ids.insert(id.clone());
    *counter += 1;

    let latex = obj
        .get("latex")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let caption = obj
        .get("caption")
        .and_then(Value::as_str)
        .map(str::to_string);
    let inline = obj.get("inline").map(json_truthy).unwrap_or(false);

    Ok(EquationItem {
        id,
        latex,
        inline,
        caption,
    })
}

/// JSON truthiness: `null`, `false`, `0`, `""`, `[]` and `{}` are false.
fn json_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
