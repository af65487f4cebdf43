//! # import-fix
//!
//! Descriptor types for missing-import fixes in a source editing/analysis
//! tool. A resolution engine finds a symbol that would satisfy an unresolved
//! identifier — in another project, an already-referenced binary, an
//! installable package, or a reference assembly — and records the outcome as
//! an immutable [`ImportFix`]. Presentation and application layers consume
//! the descriptor; nothing here searches for symbols or touches the
//! workspace.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! fix       → ImportFix descriptor, factories, consumer seams
//!   ↓
//! base      → Primitives (DocumentId, ProjectId, DocumentSnapshot, TextRange)
//! ```
//!
//! ## Usage
//!
//! ```
//! use import_fix::{
//!     DocumentId, DocumentSnapshot, FixPriority, ImportFix, ProjectId, TextEdit,
//!     well_known_tags,
//! };
//!
//! let doc = DocumentSnapshot::new(DocumentId::new(0), ProjectId::new(0), "Utils.help();\n");
//! let fix = ImportFix::for_project_symbol(
//!     &doc,
//!     vec![TextEdit::insert(0.into(), "use utils::Utils;\n")],
//!     "Add reference to 'utils'",
//!     [well_known_tags::PROJECT_REFERENCE],
//!     FixPriority::Medium,
//!     ProjectId::new(1),
//! )?;
//! assert_eq!(fix.title(), "Add reference to 'utils'");
//! # Ok::<(), import_fix::FixDataError>(())
//! ```

// ============================================================================
// MODULES (dependency order: base → fix)
// ============================================================================

/// Foundation types: DocumentId, ProjectId, DocumentSnapshot, TextRange
pub mod base;

/// Import-fix descriptors: ImportFix, factories, FixApplier seam
pub mod fix;

// Re-export foundation types
pub use base::{DocumentId, DocumentSnapshot, ProjectId, TextRange, TextSize};

// Re-export the descriptor surface
pub use fix::{
    FixAction, FixApplier, FixDataError, FixDisplay, FixKind, FixPriority, ImportFix,
    PendingPackageFix, REFERENCE_ASSEMBLY_PRIORITY, TextEdit, apply_fix, sort_for_display,
    well_known_tags,
};
