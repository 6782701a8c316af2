//! Markup sanitization: validate and normalize one item before assembly.
//!
//! This is a filter, not a renderer. It rejects markup that could perform
//! file I/O or uncontrolled macro expansion once the document reaches a
//! real TeX toolchain, strips math delimiters the assembler will re-add,
//! normalizes a small set of known-safe macro variants, and fails closed
//! on unbalanced bracket nesting. Pure and stateless: same input, same
//! outcome.

use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::SanitizeError;
use super::item::EquationItem;

/// Commands with file I/O or unbounded expansion semantics. Matching any
/// of these as a backslash-prefixed word-bounded token is a hard
/// rejection, never a silent strip.
static BANNED_CMDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\\(write|input|include|openout|read|file|loop|repeat|csname|immediate)\b")
        .expect("banned command pattern is valid")
});

/// Validates and normalizes a single item's markup.
///
/// The returned item carries the same id, inline flag and caption with
/// fully normalized markup. The banned-command scan covers the caption as
/// well as the markup, since both end up inside the generated document.
pub fn sanitize_item(item: &EquationItem) -> Result<EquationItem, SanitizeError> {
    if BANNED_CMDS.is_match(&item.latex) {
        return Err(SanitizeError::BannedCommand);
    }
    if let Some(caption) = &item.caption {
        if BANNED_CMDS.is_match(caption) {
            return Err(SanitizeError::BannedCommand);
        }
    }

    let body = strip_wrappers(&item.latex);
    let body = normalize_macros(&body);
    check_brackets(&body)?;

    Ok(EquationItem {
        id: item.id.clone(),
        latex: body,
        inline: item.inline,
        caption: item.caption.clone(),
    })
}

/// Removes display-math delimiters (`\[`, `\]`) and all `$` characters,
/// so pasted markup that carries its own delimiters does not produce
/// malformed output when the assembler adds its own.
fn strip_wrappers(latex: &str) -> String {
    latex
        .trim()
        .replace("\\[", "")
        .replace("\\]", "")
        .replace('$', "")
        .trim()
        .to_string()
}

/// Replaces `\dfrac` with `\frac` and removes `\left`/`\right` sizing
/// commands. The removal is textual, not bracket-aware.
fn normalize_macros(latex: &str) -> String {
    latex
        .replace("\\dfrac", "\\frac")
        .replace("\\left", "")
        .replace("\\right", "")
}

/// Stack-based balance check for `()`, `[]` and `{}`.
fn check_brackets(s: &str) -> Result<(), SanitizeError> {
    let mut stack = Vec::new();
    for ch in s.chars() {
        match ch {
            '(' | '[' | '{' => stack.push(ch),
            ')' | ']' | '}' => {
                let expected = match ch {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                if stack.pop() != Some(expected) {
                    return Err(SanitizeError::UnbalancedBrackets);
                }
            }
            _ => {}
        }
    }
    if stack.is_empty() {
        Ok(())
    } else {
        Err(SanitizeError::UnbalancedBrackets)
    }
}
