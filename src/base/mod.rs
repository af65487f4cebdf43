//! Foundation types for the import-fix crate.
//!
//! This module provides the primitives the descriptor layer is built on:
//! - [`DocumentId`], [`ProjectId`] - Opaque workspace identifiers
//! - [`DocumentSnapshot`] - Immutable view of a document's text
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//!
//! This module has NO dependencies on other import-fix modules.

mod ids;
mod snapshot;

pub use ids::{DocumentId, ProjectId};
pub use snapshot::DocumentSnapshot;
pub use text_size::{TextRange, TextSize};

// Re-export text-size for convenience
pub use text_size;
