use regex::Regex;
use scraper::ElementRef;
use std::sync::LazyLock;

use crate::filter::{NodeFilter, NodeKind, Traversal};

/// Any run of whitespace spanning two or more newlines
static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

/// Linearizes a subtree into paragraph-separated plain text.
///
/// Walks the descendants of `root` in document order. Rejected subtrees are
/// dropped whole, skipped elements contribute only their children, text nodes
/// contribute their trimmed text plus a space, and block anchors contribute a
/// separator before their content.
pub fn extract_text(root: ElementRef<'_>, filter: &NodeFilter) -> String {
    let mut out = String::new();
    let mut stack: Vec<_> = root.children().rev().collect();

    while let Some(node) = stack.pop() {
        let Some(kind) = NodeKind::of(node.value()) else {
            continue;
        };

        match filter.classify(&kind) {
            Traversal::Reject => continue,
            Traversal::Accept => emit(&kind, &mut out),
            Traversal::Skip => {}
        }

        stack.extend(node.children().rev());
    }

    normalize_blank_lines(&out)
}

fn emit(kind: &NodeKind<'_>, out: &mut String) {
    match kind {
        NodeKind::Text(text) => {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                out.push_str(trimmed);
                out.push(' ');
            }
        }
        NodeKind::Element(element) => {
            if element.name() == "br" {
                out.push('\n');
            } else {
                out.push_str("\n\n");
            }
        }
    }
}

/// Collapses every blank-line run to exactly one blank line and trims the ends
pub fn normalize_blank_lines(text: &str) -> String {
    BLANK_LINES.replace_all(text, "\n\n").trim().to_string()
}
