//! Split-level detection.
//!
//! Scans the whole document once (fence-aware) and picks the heading depth
//! that delimits top-level sections.

use docshard_shared::SplitLevel;
use tracing::debug;

use crate::fence::FenceTracker;
use crate::heading::parse_atx;

/// Choose the section boundary depth for a document.
///
/// Tallies headings of depth 2–6 outside fenced blocks, then picks:
/// 1. the smallest depth occurring at least twice,
/// 2. else the smallest depth occurring at least once,
/// 3. else depth 2.
///
/// A single deep heading is more likely sub-structure than a true section
/// boundary, hence the preference for the shallowest *repeating* depth.
pub fn detect_split_level(text: &str) -> SplitLevel {
    let mut tracker = FenceTracker::new();
    // Index 0 = depth 2 … index 4 = depth 6.
    let mut tallies = [0usize; 5];

    for line in text.split('\n') {
        if tracker.observe(line).verbatim() {
            continue;
        }
        if let Some(h) = parse_atx(line) {
            if (2..=6).contains(&h.depth) {
                tallies[h.depth - 2] += 1;
            }
        }
    }

    let chosen = pick_depth(&tallies);
    debug!(?tallies, depth = chosen.depth(), "split level detected");
    chosen
}

fn pick_depth(tallies: &[usize; 5]) -> SplitLevel {
    for (i, &count) in tallies.iter().enumerate() {
        if count >= 2 {
            return SplitLevel::new((i + 2) as u8);
        }
    }
    for (i, &count) in tallies.iter().enumerate() {
        if count >= 1 {
            return SplitLevel::new((i + 2) as u8);
        }
    }
    SplitLevel::default()
}
