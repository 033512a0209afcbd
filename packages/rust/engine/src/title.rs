//! Document title extraction.

use crate::fence::is_delimiter_line;
use crate::heading::parse_atx;

/// Final fallback when no title can be found.
const DEFAULT_TITLE: &str = "Document";

/// Find the document's display title.
///
/// Scans from the top and stops entirely at the first fence delimiter line —
/// fenced content is never searched for a title. Preference order:
/// 1. the first depth-1 ATX heading with non-blank text,
/// 2. the first non-empty line that is not an HTML comment opener,
/// 3. the literal `"Document"`.
pub fn extract_title(text: &str) -> String {
    let mut fallback: Option<&str> = None;

    for line in text.split('\n') {
        if is_delimiter_line(line) {
            break;
        }

        if let Some(h) = parse_atx(line) {
            if h.depth == 1 {
                let t = h.trimmed_text();
                if !t.is_empty() {
                    return t.to_string();
                }
                continue;
            }
        }

        if fallback.is_none() {
            let trimmed = line.trim();
            if !trimmed.is_empty() && !trimmed.starts_with("<!--") {
                fallback = Some(trimmed);
            }
        }
    }

    fallback.unwrap_or(DEFAULT_TITLE).to_string()
}
