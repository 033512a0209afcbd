//! Heading re-leveling for extracted sections.
//!
//! A section cut out at split level N starts with an `#`×N heading; in its
//! standalone file that heading should read as depth 1, with nested
//! sub-headings shifted proportionally.

use docshard_shared::SplitLevel;

use crate::fence::FenceTracker;
use crate::heading::parse_atx;

/// Rewrite one section's raw lines, raising every heading at depth >=
/// `split_level` by `split_level - 1`, floored at depth 1.
///
/// Fence state is tracked independently over just this section, so headings
/// inside fenced regions are left untouched. Headings shallower than the
/// split level (which can only occur as ordinary content) are not moved.
pub fn adjust_heading_levels(lines: &[String], split_level: SplitLevel) -> Vec<String> {
    let mut tracker = FenceTracker::new();
    let delta = split_level.depth() - 1;

    lines
        .iter()
        .map(|line| {
            if tracker.observe(line).verbatim() {
                return line.clone();
            }

            match parse_atx(line) {
                Some(h) if h.depth >= split_level.depth() => {
                    let new_depth = (h.depth - delta).max(1);
                    // Keep everything after the hashes verbatim, spacing included.
                    format!("{}{}", "#".repeat(new_depth), &line[h.depth..])
                }
                _ => line.clone(),
            }
        })
        .collect()
}
