//! Escaping for user-controlled text emitted into the TeX document.
//!
//! Item ids and captions are user input. The banned-command scan covers
//! them, but markup-special characters could still break document
//! structure when interpolated into headings, labels, or caption text,
//! so they are escaped at emission time.

/// Escapes TeX-special characters for use in text context (section
/// headings, captions).
pub fn latex_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\textbackslash{}"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '$' => out.push_str("\\$"),
            '&' => out.push_str("\\&"),
            '#' => out.push_str("\\#"),
            '%' => out.push_str("\\%"),
            '_' => out.push_str("\\_"),
            '^' => out.push_str("\\textasciicircum{}"),
            '~' => out.push_str("\\textasciitilde{}"),
            _ => out.push(ch),
        }
    }
    out
}

/// Restricts a string to characters that are safe inside a `\label`
/// argument; anything else becomes `-`.
pub fn label_safe(id: &str) -> String {
    id.chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || matches!(ch, ':' | '_' | '-') {
                ch
            } else {
                '-'
            }
        })
        .collect()
}
