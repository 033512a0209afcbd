//! Navigation index assembly.
//!
//! Builds the `index.md` that ties the generated parts back together:
//! document title, intro, and a link list over every section file.

use crate::heading::parse_atx;

/// Assemble the `index.md` content.
///
/// Layout: an H1 of the document title, the trimmed intro (when non-empty,
/// separated by a blank line), a `## Sections` heading, then one link per
/// section in source order pointing at `./<filename>`. Always ends with a
/// single trailing newline; a document with no sections gets an empty list.
///
/// The title is restated as the H1, so when the intro opens with the
/// document's own depth-1 heading that line is dropped rather than shown
/// twice.
pub fn assemble_index(
    document_title: &str,
    intro_lines: &[String],
    entries: &[(String, String)],
) -> String {
    let mut out = format!("# {document_title}\n");

    let intro = intro_without_title(intro_lines, document_title).join("\n");
    let intro = intro.trim();
    if !intro.is_empty() {
        out.push('\n');
        out.push_str(intro);
        out.push('\n');
    }

    out.push_str("\n## Sections\n");

    if !entries.is_empty() {
        out.push('\n');
        for (title, filename) in entries {
            out.push_str(&format!("- [{title}](./{filename})\n"));
        }
    }

    out
}

/// Drop the intro's opening depth-1 heading when it restates the title.
fn intro_without_title<'a>(intro_lines: &'a [String], document_title: &str) -> &'a [String] {
    for (i, line) in intro_lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        if let Some(h) = parse_atx(line) {
            if h.depth == 1 && h.trimmed_text() == document_title {
                return &intro_lines[i + 1..];
            }
        }
        break;
    }
    intro_lines
}
