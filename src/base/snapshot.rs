//! Immutable document snapshots.
//!
//! A [`DocumentSnapshot`] is the resolution engine's view of one document at
//! the moment a fix candidate is discovered. Factories validate edit spans
//! against it; the descriptor itself keeps only the [`DocumentId`], so the
//! snapshot's lifetime is entirely the caller's concern.

use std::sync::Arc;

use text_size::{TextRange, TextSize};

use super::{DocumentId, ProjectId};

/// An immutable view of a document's text at resolution time.
#[derive(Clone, Debug)]
pub struct DocumentSnapshot {
    id: DocumentId,
    project: ProjectId,
    text: Arc<str>,
}

impl DocumentSnapshot {
    /// Create a snapshot for a document owned by `project`.
    pub fn new(id: DocumentId, project: ProjectId, text: impl Into<Arc<str>>) -> Self {
        Self {
            id,
            project,
            text: text.into(),
        }
    }

    /// The document this snapshot views.
    pub fn id(&self) -> DocumentId {
        self.id
    }

    /// The project that owns the document.
    pub fn project(&self) -> ProjectId {
        self.project
    }

    /// The document text at snapshot time.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length of the snapshot text in bytes.
    pub fn len(&self) -> TextSize {
        TextSize::of(&*self.text)
    }

    /// Check if the snapshot text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check whether `range` lies within the snapshot text.
    pub fn contains_range(&self, range: TextRange) -> bool {
        range.end() <= self.len()
    }
}
