//! The central partition pass.
//!
//! Walks every line of the normalized document exactly once, tracking fence
//! state, and buffers lines into the intro region or into the currently open
//! section. A heading at exactly the split level opens a new section.

use docshard_shared::{PartitionResult, Section, SplitLevel};
use tracing::debug;

use crate::fence::FenceTracker;
use crate::heading::parse_atx;

/// Title assigned to a section whose boundary heading has no text.
const UNTITLED_SECTION: &str = "section";

/// Partition a normalized document at the given split level.
///
/// Every input line lands in exactly one buffer, so concatenating
/// `intro_lines` followed by all `content_lines` (joined by `"\n"`)
/// reproduces the input verbatim. Headings are not re-leveled here.
///
/// Lines that are never heading-interpreted, even at the split level:
/// - lines inside a fence, and the delimiter lines themselves,
/// - lines indented by four or more spaces (indented code).
///
/// Headings at any *other* depth are ordinary content and stay in whatever
/// buffer is currently open.
pub fn partition(text: &str, split_level: SplitLevel, document_title: &str) -> PartitionResult {
    let mut tracker = FenceTracker::new();
    let mut intro_lines: Vec<String> = Vec::new();
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<Section> = None;

    for line in text.split('\n') {
        let fence = tracker.observe(line);
        let verbatim = fence.verbatim() || line.starts_with("    ");

        if !verbatim {
            if let Some(h) = parse_atx(line) {
                if h.depth == split_level.depth() {
                    if let Some(done) = current.take() {
                        sections.push(done);
                    }

                    let trimmed = h.trimmed_text();
                    let title = if trimmed.is_empty() {
                        UNTITLED_SECTION.to_string()
                    } else {
                        trimmed.to_string()
                    };

                    current = Some(Section {
                        title,
                        content_lines: vec![line.to_string()],
                    });
                    continue;
                }
            }
        }

        match current.as_mut() {
            Some(section) => section.content_lines.push(line.to_string()),
            None => intro_lines.push(line.to_string()),
        }
    }

    if let Some(done) = current.take() {
        sections.push(done);
    }

    debug!(
        sections = sections.len(),
        intro_lines = intro_lines.len(),
        level = split_level.depth(),
        "document partitioned"
    );

    PartitionResult {
        document_title: document_title.to_string(),
        intro_lines,
        sections,
        split_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(depth: u8) -> SplitLevel {
        SplitLevel::new(depth)
    }

    /// Intro plus all section lines must reproduce the input.
    fn assert_preserved(input: &str, result: &PartitionResult) {
        let mut lines: Vec<&str> = result.intro_lines.iter().map(String::as_str).collect();
        for s in &result.sections {
            lines.extend(s.content_lines.iter().map(String::as_str));
        }
        assert_eq!(lines.join("\n"), input);
    }

    #[test]
    fn splits_into_intro_and_sections() {
        let doc = "# Title\n\nIntro.\n\n## One\nA\n\n## Two\nB\n";
        let result = partition(doc, at(2), "Title");

        assert_eq!(result.sections.len(), 2);
        assert_eq!(result.sections[0].title, "One");
        assert_eq!(result.sections[1].title, "Two");
        assert_eq!(result.intro_lines, vec!["# Title", "", "Intro.", ""]);
        // Each section starts with its own heading line.
        assert_eq!(result.sections[0].content_lines[0], "## One");
        assert_eq!(result.sections[1].content_lines[0], "## Two");
        assert_preserved(doc, &result);
    }

    #[test]
    fn fenced_headings_do_not_open_sections() {
        let doc = "```\n## not a heading\n```\n\n## Real\nX\n";
        let result = partition(doc, at(2), "Document");

        assert_eq!(result.sections.len(), 1);
        assert_eq!(result.sections[0].title, "Real");
        // The fenced lines stayed in the intro.
        assert!(result.intro_lines.contains(&"## not a heading".to_string()));
        assert_preserved(doc, &result);
    }

    #[test]
    fn fence_inside_section_shields_later_headings() {
        let doc = "## A\n```\n## fenced\n```\n## B\n";
        let result = partition(doc, at(2), "Document");

        assert_eq!(result.sections.len(), 2);
        assert_eq!(result.sections[0].content_lines.len(), 4);
        assert_preserved(doc, &result);
    }

    #[test]
    fn indented_heading_is_code_not_boundary() {
        let doc = "## A\n    ## indented code\n## B\n";
        let result = partition(doc, at(2), "Document");

        assert_eq!(result.sections.len(), 2);
        assert_eq!(
            result.sections[0].content_lines,
            vec!["## A", "    ## indented code"]
        );
        assert_preserved(doc, &result);
    }

    #[test]
    fn other_depths_are_ordinary_content() {
        let doc = "## A\n### deeper\n# shallower\n## B\n";
        let result = partition(doc, at(2), "Document");

        assert_eq!(result.sections.len(), 2);
        assert_eq!(
            result.sections[0].content_lines,
            vec!["## A", "### deeper", "# shallower"]
        );
        assert_preserved(doc, &result);
    }

    #[test]
    fn blank_heading_gets_placeholder_title() {
        let doc = "##\ncontent\n";
        let result = partition(doc, at(2), "Document");

        assert_eq!(result.sections.len(), 1);
        assert_eq!(result.sections[0].title, "section");
        assert_preserved(doc, &result);
    }

    #[test]
    fn no_boundary_headings_means_everything_is_intro() {
        let doc = "# Title\n\nprose only\n";
        let result = partition(doc, at(2), "Title");

        assert!(result.sections.is_empty());
        assert_preserved(doc, &result);
    }

    #[test]
    fn partition_at_level_three() {
        let doc = "## container\n### first\nx\n### second\ny\n";
        let result = partition(doc, at(3), "Document");

        assert_eq!(result.sections.len(), 2);
        assert_eq!(result.intro_lines, vec!["## container"]);
        assert_preserved(doc, &result);
    }

    #[test]
    fn unterminated_fence_swallows_remainder() {
        let doc = "## A\n```\n## never a boundary\n";
        let result = partition(doc, at(2), "Document");

        assert_eq!(result.sections.len(), 1);
        assert_preserved(doc, &result);
    }

    #[test]
    fn empty_input_is_a_single_empty_intro_line() {
        let result = partition("", at(2), "Document");
        assert!(result.sections.is_empty());
        assert_preserved("", &result);
    }
}
