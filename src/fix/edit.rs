//! Text edits recorded by a fix.
//!
//! Usually just the import statement to insert. May also include a change to
//! the identifier the fix was invoked on, e.g. to repair its casing.

use std::sync::Arc;

use crate::base::{TextRange, TextSize};

/// One text replacement to apply to the source document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEdit {
    range: TextRange,
    new_text: Arc<str>,
}

impl TextEdit {
    /// Replace `range` with `new_text`.
    pub fn replace(range: TextRange, new_text: impl Into<Arc<str>>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }

    /// Insert `new_text` at `offset`.
    pub fn insert(offset: TextSize, new_text: impl Into<Arc<str>>) -> Self {
        Self::replace(TextRange::empty(offset), new_text)
    }

    /// Delete `range`.
    pub fn delete(range: TextRange) -> Self {
        Self::replace(range, "")
    }

    /// The span being replaced.
    pub fn range(&self) -> TextRange {
        self.range
    }

    /// The replacement text.
    pub fn new_text(&self) -> &str {
        &self.new_text
    }

    /// Check if this edit only removes text.
    pub fn is_deletion(&self) -> bool {
        self.new_text.is_empty() && !self.range.is_empty()
    }
}
