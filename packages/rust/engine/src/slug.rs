//! Filename derivation for section files.
//!
//! Titles become lowercase, accent-folded, hyphenated slugs; an allocator
//! keeps the generated names collision-free within one output set.

use std::collections::HashSet;

use docshard_shared::INDEX_FILE;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Slug used when a title reduces to nothing.
const FALLBACK_SLUG: &str = "section";

/// Derive a filesystem-safe slug from a section title.
///
/// NFKD-decompose and strip combining marks (so `Résumé` folds to `resume`),
/// lowercase, keep ASCII letters/digits/hyphens, map runs of whitespace,
/// underscores, and hyphens to a single hyphen, and trim hyphens at the
/// ends. An empty result falls back to `"section"`.
pub fn slugify(title: &str) -> String {
    let folded: String = title
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect();

    let mut slug = String::with_capacity(folded.len());
    for c in folded.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
        } else if c.is_whitespace() || c == '_' || c == '-' {
            if !slug.ends_with('-') {
                slug.push('-');
            }
        }
        // Every other character is simply removed.
    }

    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Allocates unique `.md` filenames for an output set.
///
/// `index.md` is reserved up front for the navigation document, so a section
/// literally titled "index" dedups to `index-2.md` like any other collision.
/// Allocation order is the source order of sections, which makes the whole
/// naming scheme deterministic: the first occurrence of a slug gets the bare
/// name, later ones get `-2`, `-3`, and so on. Names never change once
/// assigned.
#[derive(Debug)]
pub struct FilenameAllocator {
    taken: HashSet<String>,
}

impl FilenameAllocator {
    pub fn new() -> Self {
        let mut taken = HashSet::new();
        taken.insert(INDEX_FILE.to_string());
        Self { taken }
    }

    /// Allocate a unique filename for a section title.
    pub fn allocate(&mut self, title: &str) -> String {
        let stem = slugify(title);

        let bare = format!("{stem}.md");
        if self.taken.insert(bare.clone()) {
            return bare;
        }

        let mut n = 2;
        loop {
            let candidate = format!("{stem}-{n}.md");
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

impl Default for FilenameAllocator {
    fn default() -> Self {
        Self::new()
    }
}
