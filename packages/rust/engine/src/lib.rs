//! Document-sharding engine.
//!
//! Deterministically partitions one structured markdown document into an
//! introduction block plus an ordered sequence of per-section documents,
//! preserving fenced code blocks verbatim, and emits a navigable `index.md`
//! referencing the generated parts.
//!
//! The whole engine is a pure, synchronous transformation from an input
//! string to an in-memory [`ShardOutput`] — no I/O, no shared mutable state.
//! Reading the source and persisting the output belong to the callers in
//! `docshard-core`.

pub mod fence;
pub mod heading;
pub mod index;
pub mod level;
pub mod partition;
pub mod relevel;
pub mod slug;
pub mod title;

use docshard_shared::{INDEX_FILE, OutputFile, PartitionResult, ShardOutput};
use tracing::{debug, instrument};

pub use fence::{FenceFamily, FenceState, FenceTracker};
pub use slug::{FilenameAllocator, slugify};

/// Collapse CRLF and bare CR line endings to LF.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Partition a document without generating output files.
///
/// Normalizes newlines, derives the title and split level, and runs the
/// partition pass. Exposed separately because the [`PartitionResult`]
/// carries the content-preservation invariant that callers may want to
/// check or build on.
pub fn partition_document(input: &str) -> PartitionResult {
    let text = normalize_newlines(input);
    let document_title = title::extract_title(&text);
    let split_level = level::detect_split_level(&text);
    partition::partition(&text, split_level, &document_title)
}

/// Shard a document into its complete output file set.
///
/// The returned files are `index.md` first, then one file per section in
/// source order. Section headings are re-leveled so each file reads
/// naturally from depth 1, filenames are unique slugs of the section titles,
/// and every file ends with a single trailing newline. For an input with no
/// boundary headings the result degenerates to a lone `index.md`.
#[instrument(skip(input), fields(input_len = input.len()))]
pub fn shard(input: &str) -> ShardOutput {
    let parts = partition_document(input);

    let mut allocator = slug::FilenameAllocator::new();
    let mut entries: Vec<(String, String)> = Vec::with_capacity(parts.sections.len());
    let mut section_files: Vec<OutputFile> = Vec::with_capacity(parts.sections.len());

    for section in &parts.sections {
        let relative_name = allocator.allocate(&section.title);
        let adjusted = relevel::adjust_heading_levels(&section.content_lines, parts.split_level);

        entries.push((section.title.clone(), relative_name.clone()));
        section_files.push(OutputFile {
            relative_name,
            content: file_content(&adjusted),
        });
    }

    let index_content =
        index::assemble_index(&parts.document_title, &parts.intro_lines, &entries);

    let mut files = Vec::with_capacity(section_files.len() + 1);
    files.push(OutputFile {
        relative_name: INDEX_FILE.to_string(),
        content: index_content,
    });
    files.extend(section_files);

    debug!(
        title = %parts.document_title,
        level = parts.split_level.depth(),
        sections = parts.sections.len(),
        "document sharded"
    );

    ShardOutput {
        document_title: parts.document_title,
        split_level: parts.split_level,
        section_count: parts.sections.len(),
        files,
    }
}

/// Join section lines into file content with exactly one trailing newline.
fn file_content(lines: &[String]) -> String {
    format!("{}\n", lines.join("\n").trim_end_matches('\n'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use docshard_shared::SplitLevel;

    #[test]
    fn normalize_collapses_cr_and_crlf() {
        assert_eq!(normalize_newlines("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn shard_basic_document() {
        let output = shard("# Title\n\nIntro.\n\n## One\nA\n\n## Two\nB\n");

        assert_eq!(output.document_title, "Title");
        assert_eq!(output.split_level, SplitLevel::new(2));
        assert_eq!(output.section_count, 2);

        let names: Vec<&str> = output
            .files
            .iter()
            .map(|f| f.relative_name.as_str())
            .collect();
        assert_eq!(names, vec!["index.md", "one.md", "two.md"]);

        let index = &output.files[0].content;
        assert!(index.starts_with("# Title\n"));
        assert!(index.contains("Intro."));
        assert!(index.contains("- [One](./one.md)"));
        assert!(index.contains("- [Two](./two.md)"));

        assert_eq!(output.files[1].content, "# One\nA\n");
        assert_eq!(output.files[2].content, "# Two\nB\n");
    }

    #[test]
    fn shard_is_fence_immune() {
        let output = shard("```\n## not a heading\n```\n\n## Real\nX\n");

        assert_eq!(output.section_count, 1);
        let names: Vec<&str> = output
            .files
            .iter()
            .map(|f| f.relative_name.as_str())
            .collect();
        assert_eq!(names, vec!["index.md", "real.md"]);
        // The fenced pseudo-heading stays verbatim in the intro.
        assert!(output.files[0].content.contains("## not a heading"));
    }

    #[test]
    fn shard_duplicate_titles() {
        let output = shard("## Setup\na\n\n## Setup\nb\n");
        let names: Vec<&str> = output
            .files
            .iter()
            .map(|f| f.relative_name.as_str())
            .collect();
        assert_eq!(names, vec!["index.md", "setup.md", "setup-2.md"]);
    }

    #[test]
    fn shard_headingless_document() {
        let output = shard("no headings here\njust prose\n");

        assert_eq!(output.section_count, 0);
        assert_eq!(output.files.len(), 1);
        assert_eq!(output.files[0].relative_name, "index.md");
        assert!(output.files[0].content.contains("no headings here"));
        assert!(output.files[0].content.contains("## Sections"));
    }

    #[test]
    fn shard_filenames_are_unique() {
        let output = shard("## A\n\n## a\n\n## A!\n\n## Index\n");
        let mut names: Vec<&str> = output
            .files
            .iter()
            .map(|f| f.relative_name.as_str())
            .collect();
        let before = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), before);
    }

    #[test]
    fn shard_normalizes_crlf_input() {
        let output = shard("# T\r\n\r\n## One\r\nA\r\n");
        assert_eq!(output.section_count, 1);
        assert_eq!(output.files[1].content, "# One\nA\n");
    }

    #[test]
    fn section_files_end_with_single_newline() {
        let output = shard("## A\nbody\n\n\n## B\nmore");
        for file in &output.files {
            assert!(file.content.ends_with('\n'), "{}", file.relative_name);
            assert!(!file.content.ends_with("\n\n"), "{}", file.relative_name);
        }
    }

    #[test]
    fn partition_preserves_content() {
        let doc = "# T\n\nintro\n\n## A\n```\n## fenced\n```\n\n## B\nend\n";
        let parts = partition_document(doc);

        let mut lines: Vec<&str> = parts.intro_lines.iter().map(String::as_str).collect();
        for s in &parts.sections {
            lines.extend(s.content_lines.iter().map(String::as_str));
        }
        assert_eq!(lines.join("\n"), doc);
    }

    #[test]
    fn shard_deep_document_releveled() {
        // Only ### headings: split level 3, sub-headings shift up by 2.
        let doc = "### First\n#### Nested\n\n### Second\n";
        let output = shard(doc);

        assert_eq!(output.split_level, SplitLevel::new(3));
        assert_eq!(output.files[1].content, "# First\n## Nested\n");
    }
}
