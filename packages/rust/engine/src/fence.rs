//! Fenced code block tracking.
//!
//! A tiny two-state machine fed one line at a time. Everything in the engine
//! that must not misread fenced content (`## headings` inside code samples,
//! for instance) runs its lines through a [`FenceTracker`] first.

/// The delimiter family of a fence. A fence opened with backticks is only
/// closed by backticks; tildes only by tildes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceFamily {
    Backtick,
    Tilde,
}

/// Whether the scanner is currently inside a fenced region, and if so which
/// family opened it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceState {
    Normal,
    InFence(FenceFamily),
}

/// What the tracker learned from one line: the state *after* the line, and
/// whether the line itself was a fence delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFence {
    pub state: FenceState,
    pub delimiter: bool,
}

impl LineFence {
    /// True when the line must be treated as verbatim content: it is inside
    /// a fence, or it is the delimiter that opened or closed one. Verbatim
    /// lines are never interpreted as headings.
    pub fn verbatim(&self) -> bool {
        self.delimiter || matches!(self.state, FenceState::InFence(_))
    }
}

/// Line-oriented fence state machine.
///
/// An unterminated fence is tolerated: the remainder of the document simply
/// stays in-fence, matching how forgiving markdown renderers behave.
#[derive(Debug, Clone)]
pub struct FenceTracker {
    state: FenceState,
}

impl FenceTracker {
    pub fn new() -> Self {
        Self {
            state: FenceState::Normal,
        }
    }

    /// Feed one line; returns the state after the line plus whether the line
    /// was a delimiter.
    pub fn observe(&mut self, line: &str) -> LineFence {
        let family = delimiter_family(line);

        let (next, delimiter) = match (self.state, family) {
            (FenceState::Normal, Some(f)) => (FenceState::InFence(f), true),
            (FenceState::InFence(open), Some(f)) if open == f => (FenceState::Normal, true),
            // A delimiter of the other family inside a fence is just content.
            (state, Some(_)) => (state, false),
            (state, None) => (state, false),
        };

        self.state = next;
        LineFence {
            state: next,
            delimiter,
        }
    }

    pub fn state(&self) -> FenceState {
        self.state
    }
}

impl Default for FenceTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// True when the line would open or close a fence regardless of current state.
pub fn is_delimiter_line(line: &str) -> bool {
    delimiter_family(line).is_some()
}

/// A line is a fence delimiter iff, after leading whitespace, it begins with
/// three or more consecutive backticks or tildes.
fn delimiter_family(line: &str) -> Option<FenceFamily> {
    let trimmed = line.trim_start();
    let first = trimmed.chars().next()?;

    let family = match first {
        '`' => FenceFamily::Backtick,
        '~' => FenceFamily::Tilde,
        _ => return None,
    };

    let run = trimmed.chars().take_while(|&c| c == first).count();
    (run >= 3).then_some(family)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_detection() {
        let cases = [
            ("```", Some(FenceFamily::Backtick)),
            ("````rust", Some(FenceFamily::Backtick)),
            ("~~~", Some(FenceFamily::Tilde)),
            ("  ```", Some(FenceFamily::Backtick)),
            ("``", None),
            ("~~", None),
            ("text ```", None),
            ("", None),
            ("# heading", None),
        ];

        for (line, expected) in cases {
            assert_eq!(delimiter_family(line), expected, "line: {line:?}");
        }
    }

    #[test]
    fn opens_and_closes_backtick_fence() {
        let mut tracker = FenceTracker::new();

        let open = tracker.observe("```rust");
        assert!(open.delimiter);
        assert_eq!(open.state, FenceState::InFence(FenceFamily::Backtick));
        assert!(open.verbatim());

        let inside = tracker.observe("## not a heading");
        assert!(!inside.delimiter);
        assert!(inside.verbatim());

        let close = tracker.observe("```");
        assert!(close.delimiter);
        assert_eq!(close.state, FenceState::Normal);
        // The closing line is still verbatim content.
        assert!(close.verbatim());

        let after = tracker.observe("## real heading");
        assert!(!after.verbatim());
    }

    #[test]
    fn mismatched_family_does_not_close() {
        let mut tracker = FenceTracker::new();
        tracker.observe("```");

        let tilde = tracker.observe("~~~");
        assert!(!tilde.delimiter);
        assert_eq!(tilde.state, FenceState::InFence(FenceFamily::Backtick));

        let close = tracker.observe("```");
        assert_eq!(close.state, FenceState::Normal);
    }

    #[test]
    fn longer_run_closes_same_family() {
        let mut tracker = FenceTracker::new();
        tracker.observe("````");
        // Family only, not exact run length.
        let close = tracker.observe("```");
        assert_eq!(close.state, FenceState::Normal);
    }

    #[test]
    fn unterminated_fence_stays_open() {
        let mut tracker = FenceTracker::new();
        tracker.observe("~~~");
        tracker.observe("still inside");
        assert_eq!(tracker.state(), FenceState::InFence(FenceFamily::Tilde));
    }
}
