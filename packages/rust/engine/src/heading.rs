//! ATX heading recognition shared by the detector, partitioner, and adjuster.
//!
//! Only ATX (`#`-prefixed) headings are recognized. Setext (underline-style)
//! headings are deliberately not supported anywhere in the engine.

use std::sync::LazyLock;

use regex::Regex;

/// `## Title` — one to six hashes at column zero, followed by whitespace or
/// end of line. Seven or more hashes is not a heading.
static ATX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})(?:\s+(.*))?$").expect("valid regex"));

/// A parsed ATX heading line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtxHeading<'a> {
    /// Number of leading `#` characters (1..=6).
    pub depth: usize,
    /// Everything after the hashes and separating whitespace, untrimmed.
    pub text: &'a str,
}

impl AtxHeading<'_> {
    /// Heading text with surrounding whitespace removed.
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }
}

/// Parse a line as an ATX heading, if it is one.
///
/// The caller is responsible for fence and indentation exclusion; this
/// function looks at the line in isolation.
pub fn parse_atx(line: &str) -> Option<AtxHeading<'_>> {
    let caps = ATX_RE.captures(line)?;
    Some(AtxHeading {
        depth: caps[1].len(),
        text: caps.get(2).map_or("", |m| m.as_str()),
    })
}
