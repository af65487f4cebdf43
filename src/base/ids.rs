//! Opaque identifiers for workspace entities.
//!
//! The descriptor layer never owns documents or projects; it refers to them
//! through these ids, which the hosting workspace assigns and resolves.

/// Identifier for a document in the workspace.
///
/// Assigned by the hosting workspace; the descriptor only carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId(u32);

impl DocumentId {
    /// Create a new document id from a raw index.
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw index.
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// Identifier for a project in the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProjectId(u32);

impl ProjectId {
    /// Create a new project id from a raw index.
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw index.
    pub fn raw(self) -> u32 {
        self.0
    }
}
