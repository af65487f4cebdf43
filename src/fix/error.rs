//! Error types for descriptor construction.

use thiserror::Error;

use crate::base::{ProjectId, TextRange, TextSize};

/// A precondition violation while building an [`ImportFix`].
///
/// These indicate a bug in the producing resolution engine; an invalid
/// descriptor is never observable. Recoverable failures (symbol not found,
/// install failure, reference-add failure) belong to the collaborating
/// engines, not to this type.
///
/// [`ImportFix`]: super::ImportFix
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixDataError {
    /// A displayable fix was built without a title.
    #[error("fix title must not be empty")]
    EmptyTitle,

    /// A required string field was empty.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Name of the offending parameter.
        field: &'static str,
    },

    /// The metadata reference path was not absolute.
    #[error("metadata reference path is not absolute: {path}")]
    ReferencePathNotAbsolute { path: String },

    /// The project reference target is the document's own project.
    #[error("project {project:?} cannot add a reference to itself")]
    SelfProjectReference { project: ProjectId },

    /// A text edit span does not fit the source document snapshot.
    #[error("text edit {range:?} is outside the document (length {len:?})")]
    EditOutOfBounds { range: TextRange, len: TextSize },
}
