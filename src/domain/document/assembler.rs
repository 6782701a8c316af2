//! Serialization of a sanitized batch into one complete TeX document.

use chrono::{DateTime, Local};

use crate::domain::equation::EquationItem;

use super::escape::{label_safe, latex_escape};

/// Fixed document header: class, math packages, margins, paragraph
/// spacing. Not data-dependent.
const TEX_PREAMBLE: &str = r"\documentclass[11pt]{article}
\usepackage{amsmath,amssymb}
\usepackage[margin=1in]{geometry}
\setlength{\parskip}{0.5em}
\setlength{\parindent}{0pt}
\begin{document}
";

const TEX_POSTAMBLE: &str = r"\end{document}
";

/// Assembles the full TeX document for a batch at the current wall-clock
/// time. The items must already be sanitized.
pub fn build_document(items: &[EquationItem], batch_title: &str) -> String {
    build_document_at(items, batch_title, Local::now())
}

/// Assembles the full TeX document with an explicit generation timestamp.
///
/// Output is a pure function of (items, batch_title, generated_at): a
/// summary section with the item count and timestamp, then one section
/// per item in input order, wrapped either as inline math or as a
/// numbered, labeled equation block.
pub fn build_document_at(
    items: &[EquationItem],
    batch_title: &str,
    generated_at: DateTime<Local>,
) -> String {
    let now = generated_at.format("%Y-%m-%d %H:%M:%S");
    let mut lines = Vec::new();
    lines.push(TEX_PREAMBLE.to_string());

    lines.push(format!("\\section*{{{}}}", latex_escape(batch_title)));
    lines.push(format!("Total: {}\\\\ Generated at: {}", items.len(), now));

    for item in items {
        lines.push(format!("\\section*{{{}}}", latex_escape(&item.id)));
        if item.inline {
            lines.push(format!("$ {} $", item.latex));
        } else {
            lines.push(format!("\\begin{{equation}}\\label{{{}}}", label_safe(&item.id)));
            lines.push(item.latex.clone());
            lines.push("\\end{equation}".to_string());
        }
        if let Some(caption) = &item.caption {
            lines.push(format!("\\par\\small\\textit{{{}}}", latex_escape(caption)));
        }
    }

    lines.push(TEX_POSTAMBLE.to_string());
    lines.join("\n")
}
