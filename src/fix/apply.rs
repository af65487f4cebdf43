//! Consumer seams for the descriptor.
//!
//! The descriptor is pure data; the engines that mutate the workspace sit
//! behind [`FixApplier`]. [`apply_fix`] drives an applier with an exhaustive
//! match over the four kinds: reference action first, text edits second.
//! [`sort_for_display`] is the presentation layer's ordering.

use tracing::debug;

use crate::base::{DocumentId, ProjectId};

use super::data::{FixAction, ImportFix};
use super::edit::TextEdit;

/// The application layer's interface: one method per external action.
///
/// Implementations perform the actual workspace mutation (reference-graph
/// edits, package installation, text application) and report their own
/// recoverable failures through [`FixApplier::Error`].
pub trait FixApplier {
    type Error;

    /// Add a project-to-project reference to `document`'s project.
    fn add_project_reference(
        &mut self,
        document: DocumentId,
        project: ProjectId,
    ) -> Result<(), Self::Error>;

    /// Add the metadata reference at `path`, as already used by
    /// `via_project`, to `document`'s project.
    fn add_metadata_reference(
        &mut self,
        document: DocumentId,
        via_project: ProjectId,
        path: &str,
    ) -> Result<(), Self::Error>;

    /// Resolve an implementation reference satisfying `assembly_name` /
    /// `type_name` and add it. Resolution policy lives in the implementation.
    fn add_assembly_reference(
        &mut self,
        document: DocumentId,
        assembly_name: &str,
        type_name: &str,
    ) -> Result<(), Self::Error>;

    /// Install `name` at `version` (`None` = latest) from `source`.
    fn install_package(
        &mut self,
        document: DocumentId,
        source: &str,
        name: &str,
        version: Option<&str>,
    ) -> Result<(), Self::Error>;

    /// Apply the recorded text edits to `document`.
    fn apply_edits(&mut self, document: DocumentId, edits: &[TextEdit]) -> Result<(), Self::Error>;
}

/// Drive `applier` with the actions recorded in `fix`.
///
/// Performs the reference action for the fix's kind, then applies the text
/// edits (skipped when the fix carries none).
pub fn apply_fix<A: FixApplier>(fix: &ImportFix, applier: &mut A) -> Result<(), A::Error> {
    debug!(kind = fix.kind().as_str(), document = ?fix.document(), "applying import fix");

    let document = fix.document();
    match fix.action() {
        FixAction::Project {
            project_reference_to_add,
        } => applier.add_project_reference(document, *project_reference_to_add)?,
        FixAction::Metadata {
            pe_reference_project,
            pe_reference_path,
        } => applier.add_metadata_reference(document, *pe_reference_project, pe_reference_path)?,
        FixAction::ReferenceAssembly {
            assembly_name,
            fully_qualified_type_name,
        } => applier.add_assembly_reference(document, assembly_name, fully_qualified_type_name)?,
        FixAction::Package {
            source,
            name,
            version,
        } => applier.install_package(document, source, name, version.as_deref())?,
    }

    if !fix.edits().is_empty() {
        applier.apply_edits(document, fix.edits())?;
    }
    Ok(())
}

/// Order fixes the way the suggestion list shows them: highest priority
/// first, ties broken by title.
pub fn sort_for_display(fixes: &mut [ImportFix]) {
    fixes.sort_by(|a, b| {
        b.priority()
            .cmp(&a.priority())
            .then_with(|| a.title().cmp(b.title()))
    });
}
