//! Import-fix descriptors — the record of one resolved missing-symbol fix.
//!
//! When the resolution engine finds a symbol that would satisfy an
//! unresolved identifier, it records the outcome as an [`ImportFix`]: an
//! immutable, kind-tagged value carrying the text edits to make and the
//! reference (project, metadata, assembly, or package) to add. The
//! presentation layer reads the display metadata to render a suggestion;
//! the application layer matches on [`FixAction`] to perform it.
//!
//! ## Design Principles
//!
//! 1. **Factories only**: the four `ImportFix::for_*` constructors are the
//!    only way to obtain a descriptor, and each validates its kind's
//!    preconditions up front.
//! 2. **Closed sum**: per-kind payload lives inside [`FixAction`], so
//!    consumers handle all four kinds or the compiler objects.
//! 3. **Pure data**: no I/O, no symbol search, no text application — those
//!    belong to the engines behind [`FixApplier`].

mod apply;
mod data;
mod display;
mod edit;
mod error;

pub use apply::{FixApplier, apply_fix, sort_for_display};
pub use data::{FixAction, FixKind, ImportFix, PendingPackageFix, REFERENCE_ASSEMBLY_PRIORITY};
pub use display::{FixDisplay, FixPriority, well_known_tags};
pub use edit::TextEdit;
pub use error::FixDataError;
