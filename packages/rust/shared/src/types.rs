//! Core domain types for document sharding.

use serde::{Deserialize, Serialize};

/// Name of the navigation document, always present exactly once in the
/// output set and never assigned to a section file.
pub const INDEX_FILE: &str = "index.md";

// ---------------------------------------------------------------------------
// SplitLevel
// ---------------------------------------------------------------------------

/// The ATX heading depth chosen as the section boundary for one document.
///
/// Always in 2..=6; computed once per document and invariant for the whole
/// partition pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SplitLevel(u8);

impl SplitLevel {
    /// Shallowest allowed boundary depth.
    pub const MIN: SplitLevel = SplitLevel(2);
    /// Deepest allowed boundary depth.
    pub const MAX: SplitLevel = SplitLevel(6);

    /// Create a split level, clamping out-of-range depths into 2..=6.
    pub fn new(depth: u8) -> Self {
        Self(depth.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// The heading depth (number of leading `#`).
    pub fn depth(self) -> usize {
        self.0 as usize
    }
}

impl Default for SplitLevel {
    fn default() -> Self {
        Self::MIN
    }
}

impl std::fmt::Display for SplitLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Partition model
// ---------------------------------------------------------------------------

/// One extracted section: the boundary heading line plus everything up to
/// the next boundary (or end of input).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Trimmed heading text, or `"section"` when the heading was blank.
    pub title: String,
    /// Raw lines, starting with the heading line itself. Not yet re-leveled.
    pub content_lines: Vec<String>,
}

/// Result of partitioning one document.
///
/// Invariant: `intro_lines` followed by every section's `content_lines`, in
/// order, joined by `"\n"`, reproduces the normalized input verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionResult {
    /// Display title of the whole document.
    pub document_title: String,
    /// Everything before the first boundary heading.
    pub intro_lines: Vec<String>,
    /// Sections ordered by first appearance in the source.
    pub sections: Vec<Section>,
    /// The boundary depth used for this partition.
    pub split_level: SplitLevel,
}

// ---------------------------------------------------------------------------
// Output model
// ---------------------------------------------------------------------------

/// A single generated file, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFile {
    /// Filesystem-safe name relative to the destination directory.
    pub relative_name: String,
    /// Full file content, ending with a single trailing newline.
    pub content: String,
}

/// The complete output set for one sharded document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShardOutput {
    /// Display title of the source document.
    pub document_title: String,
    /// The boundary depth that was detected.
    pub split_level: SplitLevel,
    /// Number of sections extracted (zero for a heading-less document).
    pub section_count: usize,
    /// `index.md` first, then one file per section in source order.
    /// `relative_name` values are pairwise distinct.
    pub files: Vec<OutputFile>,
}
