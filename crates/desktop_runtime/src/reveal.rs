//! One-shot typewriter state for a mounted content instance.

use crate::content::{reveal_prefix, ContentNode};

/// Marker appended to the rendered output while the reveal is still running.
pub const REVEAL_CURSOR: &str = "|";

/// Monotonic character budget over a fixed content tree.
///
/// The total is computed once at construction. Each [`Revealer::tick`] grants one more
/// character until the budget reaches the total; after that the revealer is complete and
/// further ticks do nothing. A new mount builds a new revealer, which is the only way back to
/// zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revealer {
    content: ContentNode,
    total: usize,
    budget: usize,
}

impl Revealer {
    pub fn new(content: ContentNode) -> Self {
        let total = content.char_count();
        Self {
            content,
            total,
            budget: 0,
        }
    }

    /// Grants one more character. Returns `true` while the reveal was still running.
    pub fn tick(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.budget += 1;
        true
    }

    /// Jumps straight to the complete state.
    pub fn finish(&mut self) {
        self.budget = self.total;
    }

    pub fn budget(&self) -> usize {
        self.budget
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_complete(&self) -> bool {
        self.budget >= self.total
    }

    pub fn shows_cursor(&self) -> bool {
        !self.is_complete()
    }

    /// The currently visible prefix of the content.
    ///
    /// Uses the cached total, so each call walks only the revealed prefix.
    pub fn visible(&self) -> ContentNode {
        if self.is_complete() {
            return self.content.clone();
        }
        reveal_prefix(&self.content, self.budget)
    }
}
