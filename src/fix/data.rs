//! The import-fix descriptor and its factories.
//!
//! [`ImportFix`] records the outcome of resolving one missing-symbol
//! reference: which document to edit, the edits themselves, the display
//! metadata for the suggestion list, and the reference action the fix
//! needs. The four `for_*` factories are the only constructors; each
//! validates the preconditions of its kind and fails fast on violation.
//!
//! The package kind is built in two phases: [`ImportFix::for_package_symbol`]
//! yields a [`PendingPackageFix`] without display metadata (the suggestion
//! text depends on install-status lookups that happen later), and
//! [`PendingPackageFix::into_fix`] consumes it to produce the completed
//! descriptor. Completion can therefore happen at most once, and the display
//! fields cannot be read before they exist.

use std::path::Path;

use smol_str::SmolStr;
use tracing::trace;

use crate::base::{DocumentId, DocumentSnapshot, ProjectId};

use super::display::{FixDisplay, FixPriority, well_known_tags};
use super::edit::TextEdit;
use super::error::FixDataError;

/// Priority every reference-assembly fix is created with.
///
/// Reference-assembly fixes pull a new assembly reference into the project,
/// so they always rank below in-solution fixes and are not caller-tunable.
pub const REFERENCE_ASSEMBLY_PRIORITY: FixPriority = FixPriority::Lowest;

/// Discriminant of an [`ImportFix`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FixKind {
    /// Symbol found in another project of the current solution.
    ProjectSymbol,
    /// Symbol found in a binary some other project already references.
    MetadataSymbol,
    /// Symbol found in an installable package.
    PackageSymbol,
    /// Symbol found in a reference (facade) assembly.
    ReferenceAssemblySymbol,
}

impl FixKind {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProjectSymbol => "project-symbol",
            Self::MetadataSymbol => "metadata-symbol",
            Self::PackageSymbol => "package-symbol",
            Self::ReferenceAssemblySymbol => "reference-assembly-symbol",
        }
    }
}

/// The reference action a fix requires, with per-kind payload.
///
/// This is a closed sum: the application layer must match every variant,
/// and no variant exposes another kind's data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FixAction {
    /// Add a project-to-project reference, then apply the edits.
    Project {
        /// The project whose output must become a reference of the
        /// document's project.
        project_reference_to_add: ProjectId,
    },
    /// Add a metadata (binary) reference, then apply the edits.
    Metadata {
        /// The project that already holds the reference at
        /// `pe_reference_path`.
        pe_reference_project: ProjectId,
        /// Absolute path of the binary to reference.
        pe_reference_path: SmolStr,
    },
    /// Resolve and add an implementation reference for a facade type,
    /// then apply the edits.
    ReferenceAssembly {
        /// Name of the reference assembly the type was found in.
        assembly_name: SmolStr,
        /// Fully qualified name of the type that satisfied the lookup.
        fully_qualified_type_name: SmolStr,
    },
    /// Install a package, then apply the edits.
    Package {
        /// Feed the package comes from.
        source: SmolStr,
        /// Package identifier.
        name: SmolStr,
        /// Pinned version; `None` means install the latest.
        version: Option<SmolStr>,
    },
}

impl FixAction {
    /// The kind this action belongs to.
    pub fn kind(&self) -> FixKind {
        match self {
            Self::Project { .. } => FixKind::ProjectSymbol,
            Self::Metadata { .. } => FixKind::MetadataSymbol,
            Self::ReferenceAssembly { .. } => FixKind::ReferenceAssemblySymbol,
            Self::Package { .. } => FixKind::PackageSymbol,
        }
    }
}

/// One resolved missing-import fix, ready for presentation and application.
///
/// Immutable once constructed; safe to share across threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportFix {
    document: DocumentId,
    edits: Vec<TextEdit>,
    display: FixDisplay,
    action: FixAction,
}

impl ImportFix {
    /// Record a fix whose symbol lives in another project of the solution.
    ///
    /// `project_reference_to_add` must differ from the project owning
    /// `document`; a project cannot reference itself.
    pub fn for_project_symbol<I, T>(
        document: &DocumentSnapshot,
        edits: Vec<TextEdit>,
        title: impl Into<SmolStr>,
        tags: I,
        priority: FixPriority,
        project_reference_to_add: ProjectId,
    ) -> Result<Self, FixDataError>
    where
        I: IntoIterator<Item = T>,
        T: Into<SmolStr>,
    {
        let title = non_empty_title(title.into())?;
        check_edits(document, &edits)?;
        if project_reference_to_add == document.project() {
            return Err(FixDataError::SelfProjectReference {
                project: project_reference_to_add,
            });
        }

        trace!(document = ?document.id(), project = ?project_reference_to_add,
            "recorded project-symbol fix");
        Ok(Self {
            document: document.id(),
            edits,
            display: FixDisplay::new(title, tags, priority),
            action: FixAction::Project {
                project_reference_to_add,
            },
        })
    }

    /// Record a fix whose symbol lives in a binary that `pe_reference_project`
    /// already references at `pe_reference_path`.
    ///
    /// The path must be non-empty and absolute so the application layer can
    /// add the same reference to the document's project.
    pub fn for_metadata_symbol<I, T>(
        document: &DocumentSnapshot,
        edits: Vec<TextEdit>,
        title: impl Into<SmolStr>,
        tags: I,
        priority: FixPriority,
        pe_reference_project: ProjectId,
        pe_reference_path: impl Into<SmolStr>,
    ) -> Result<Self, FixDataError>
    where
        I: IntoIterator<Item = T>,
        T: Into<SmolStr>,
    {
        let title = non_empty_title(title.into())?;
        let path = non_empty(pe_reference_path.into(), "pe_reference_path")?;
        if !Path::new(path.as_str()).is_absolute() {
            return Err(FixDataError::ReferencePathNotAbsolute {
                path: path.to_string(),
            });
        }
        check_edits(document, &edits)?;

        trace!(document = ?document.id(), path = %path, "recorded metadata-symbol fix");
        Ok(Self {
            document: document.id(),
            edits,
            display: FixDisplay::new(title, tags, priority),
            action: FixAction::Metadata {
                pe_reference_project,
                pe_reference_path: path,
            },
        })
    }

    /// Record a fix whose symbol lives in a reference (facade) assembly not
    /// yet available to the project.
    ///
    /// Tags and priority are engine-fixed for this kind
    /// ([`REFERENCE_ASSEMBLY_PRIORITY`] and [`well_known_tags::ADD_REFERENCE`])
    /// and deliberately not caller-configurable.
    pub fn for_reference_assembly_symbol(
        document: &DocumentSnapshot,
        edits: Vec<TextEdit>,
        title: impl Into<SmolStr>,
        assembly_name: impl Into<SmolStr>,
        fully_qualified_type_name: impl Into<SmolStr>,
    ) -> Result<Self, FixDataError> {
        let title = non_empty_title(title.into())?;
        let assembly_name = non_empty(assembly_name.into(), "assembly_name")?;
        let fully_qualified_type_name = non_empty(
            fully_qualified_type_name.into(),
            "fully_qualified_type_name",
        )?;
        check_edits(document, &edits)?;

        trace!(document = ?document.id(), assembly = %assembly_name,
            "recorded reference-assembly fix");
        Ok(Self {
            document: document.id(),
            edits,
            display: FixDisplay::new(
                title,
                [well_known_tags::ADD_REFERENCE],
                REFERENCE_ASSEMBLY_PRIORITY,
            ),
            action: FixAction::ReferenceAssembly {
                assembly_name,
                fully_qualified_type_name,
            },
        })
    }

    /// Record a fix whose symbol lives in an installable package.
    ///
    /// Display metadata is intentionally absent at this stage — the
    /// suggestion text depends on install-status lookups that only happen
    /// later. The returned [`PendingPackageFix`] must be completed via
    /// [`PendingPackageFix::into_fix`] before the fix can be displayed.
    /// `version` of `None` means install the latest.
    pub fn for_package_symbol(
        document: &DocumentSnapshot,
        edits: Vec<TextEdit>,
        source: impl Into<SmolStr>,
        name: impl Into<SmolStr>,
        version: Option<SmolStr>,
    ) -> Result<PendingPackageFix, FixDataError> {
        let source = non_empty(source.into(), "source")?;
        let name = non_empty(name.into(), "name")?;
        check_edits(document, &edits)?;

        trace!(document = ?document.id(), package = %name, "recorded package-symbol fix");
        Ok(PendingPackageFix {
            document: document.id(),
            edits,
            source,
            name,
            version,
        })
    }

    /// Discriminant of this fix.
    pub fn kind(&self) -> FixKind {
        self.action.kind()
    }

    /// The document the fix originated from and will edit.
    pub fn document(&self) -> DocumentId {
        self.document
    }

    /// The text edits to apply, in order. May be empty for fixes whose
    /// primary effect is a reference addition.
    pub fn edits(&self) -> &[TextEdit] {
        &self.edits
    }

    /// String shown in the suggestion list.
    pub fn title(&self) -> &str {
        self.display.title()
    }

    /// Glyph tags, in insertion order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.display.tags()
    }

    /// Ranking weight in the suggestion list.
    pub fn priority(&self) -> FixPriority {
        self.display.priority()
    }

    /// The reference action and its per-kind payload.
    pub fn action(&self) -> &FixAction {
        &self.action
    }

    /// The display metadata as one bundle.
    pub fn display(&self) -> &FixDisplay {
        &self.display
    }
}

/// A package fix awaiting its display metadata.
///
/// Produced by [`ImportFix::for_package_symbol`]; carries the package
/// payload and edits but no title, tags, or priority. Converting it into an
/// [`ImportFix`] consumes it, so the deferred display data is supplied
/// exactly once and can never be read before it is set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingPackageFix {
    document: DocumentId,
    edits: Vec<TextEdit>,
    source: SmolStr,
    name: SmolStr,
    version: Option<SmolStr>,
}

impl PendingPackageFix {
    /// The document the fix will edit.
    pub fn document(&self) -> DocumentId {
        self.document
    }

    /// The text edits to apply. May be empty when no import statement is
    /// needed and installing the package is the whole fix.
    pub fn edits(&self) -> &[TextEdit] {
        &self.edits
    }

    /// Feed the package comes from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Package identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pinned version; `None` means install the latest.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Supply the display metadata and produce the completed descriptor.
    pub fn into_fix<I, T>(
        self,
        title: impl Into<SmolStr>,
        tags: I,
        priority: FixPriority,
    ) -> Result<ImportFix, FixDataError>
    where
        I: IntoIterator<Item = T>,
        T: Into<SmolStr>,
    {
        let title = non_empty_title(title.into())?;
        Ok(ImportFix {
            document: self.document,
            edits: self.edits,
            display: FixDisplay::new(title, tags, priority),
            action: FixAction::Package {
                source: self.source,
                name: self.name,
                version: self.version,
            },
        })
    }
}

fn non_empty_title(title: SmolStr) -> Result<SmolStr, FixDataError> {
    if title.is_empty() {
        return Err(FixDataError::EmptyTitle);
    }
    Ok(title)
}

fn non_empty(value: SmolStr, field: &'static str) -> Result<SmolStr, FixDataError> {
    if value.is_empty() {
        return Err(FixDataError::EmptyField { field });
    }
    Ok(value)
}

fn check_edits(document: &DocumentSnapshot, edits: &[TextEdit]) -> Result<(), FixDataError> {
    for edit in edits {
        if !document.contains_range(edit.range()) {
            return Err(FixDataError::EditOutOfBounds {
                range: edit.range(),
                len: document.len(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> DocumentSnapshot {
        DocumentSnapshot::new(
            DocumentId::new(1),
            ProjectId::new(1),
            "fn main() { Utils::help(); }\n",
        )
    }

    fn import_edit() -> TextEdit {
        TextEdit::insert(0.into(), "use utils::Utils;\n")
    }

    #[test]
    fn test_project_symbol_roundtrip() {
        let fix = ImportFix::for_project_symbol(
            &doc(),
            vec![import_edit()],
            "Add reference to 'Utils'",
            [well_known_tags::PROJECT_REFERENCE],
            FixPriority::Medium,
            ProjectId::new(2),
        )
        .unwrap();

        assert_eq!(fix.kind(), FixKind::ProjectSymbol);
        assert_eq!(fix.document(), DocumentId::new(1));
        assert_eq!(fix.title(), "Add reference to 'Utils'");
        assert_eq!(fix.priority(), FixPriority::Medium);
        assert_eq!(fix.edits().len(), 1);
        match fix.action() {
            FixAction::Project {
                project_reference_to_add,
            } => assert_eq!(*project_reference_to_add, ProjectId::new(2)),
            other => panic!("wrong action: {other:?}"),
        }
    }

    #[test]
    fn test_project_symbol_allows_empty_edits() {
        let fix = ImportFix::for_project_symbol(
            &doc(),
            Vec::new(),
            "Add reference to 'Utils'",
            [well_known_tags::PROJECT_REFERENCE],
            FixPriority::Medium,
            ProjectId::new(2),
        )
        .unwrap();
        assert!(fix.edits().is_empty());
    }

    #[test]
    fn test_project_symbol_rejects_self_reference() {
        let err = ImportFix::for_project_symbol(
            &doc(),
            Vec::new(),
            "Add reference",
            [well_known_tags::PROJECT_REFERENCE],
            FixPriority::Medium,
            ProjectId::new(1),
        )
        .unwrap_err();
        assert_eq!(
            err,
            FixDataError::SelfProjectReference {
                project: ProjectId::new(1)
            }
        );
    }

    #[test]
    fn test_empty_title_rejected() {
        let err = ImportFix::for_project_symbol(
            &doc(),
            Vec::new(),
            "",
            [well_known_tags::PROJECT_REFERENCE],
            FixPriority::Medium,
            ProjectId::new(2),
        )
        .unwrap_err();
        assert_eq!(err, FixDataError::EmptyTitle);
    }

    #[test]
    fn test_edit_out_of_bounds_rejected() {
        let snap = doc();
        let past_end = TextEdit::insert(1000.into(), "use x;\n");
        let err = ImportFix::for_project_symbol(
            &snap,
            vec![past_end],
            "Add import",
            [well_known_tags::IMPORT],
            FixPriority::Medium,
            ProjectId::new(2),
        )
        .unwrap_err();
        assert!(matches!(err, FixDataError::EditOutOfBounds { .. }));
    }

    #[test]
    fn test_metadata_symbol_roundtrip() {
        let fix = ImportFix::for_metadata_symbol(
            &doc(),
            vec![import_edit()],
            "Add reference to System.Json",
            [well_known_tags::METADATA_REFERENCE],
            FixPriority::Low,
            ProjectId::new(3),
            "/refs/System.Json.dll",
        )
        .unwrap();

        assert_eq!(fix.kind(), FixKind::MetadataSymbol);
        match fix.action() {
            FixAction::Metadata {
                pe_reference_project,
                pe_reference_path,
            } => {
                assert_eq!(*pe_reference_project, ProjectId::new(3));
                assert_eq!(pe_reference_path.as_str(), "/refs/System.Json.dll");
            }
            other => panic!("wrong action: {other:?}"),
        }
    }

    #[test]
    fn test_metadata_symbol_rejects_relative_path() {
        let err = ImportFix::for_metadata_symbol(
            &doc(),
            Vec::new(),
            "Add reference",
            [well_known_tags::METADATA_REFERENCE],
            FixPriority::Low,
            ProjectId::new(3),
            "refs/System.Json.dll",
        )
        .unwrap_err();
        assert!(matches!(err, FixDataError::ReferencePathNotAbsolute { .. }));
    }

    #[test]
    fn test_metadata_symbol_rejects_empty_path() {
        let err = ImportFix::for_metadata_symbol(
            &doc(),
            Vec::new(),
            "Add reference",
            [well_known_tags::METADATA_REFERENCE],
            FixPriority::Low,
            ProjectId::new(3),
            "",
        )
        .unwrap_err();
        assert_eq!(
            err,
            FixDataError::EmptyField {
                field: "pe_reference_path"
            }
        );
    }

    #[test]
    fn test_reference_assembly_uses_fixed_defaults() {
        let fix = ImportFix::for_reference_assembly_symbol(
            &doc(),
            vec![import_edit()],
            "Add reference to 'System.Runtime'",
            "System.Runtime",
            "System.ValueTuple",
        )
        .unwrap();

        assert_eq!(fix.kind(), FixKind::ReferenceAssemblySymbol);
        assert_eq!(fix.priority(), REFERENCE_ASSEMBLY_PRIORITY);
        assert_eq!(fix.priority(), FixPriority::Lowest);
        let tags: Vec<_> = fix.tags().collect();
        assert_eq!(tags, vec![well_known_tags::ADD_REFERENCE]);
        match fix.action() {
            FixAction::ReferenceAssembly {
                assembly_name,
                fully_qualified_type_name,
            } => {
                assert_eq!(assembly_name.as_str(), "System.Runtime");
                assert_eq!(fully_qualified_type_name.as_str(), "System.ValueTuple");
            }
            other => panic!("wrong action: {other:?}"),
        }
    }

    #[test]
    fn test_reference_assembly_rejects_empty_names() {
        let err = ImportFix::for_reference_assembly_symbol(
            &doc(),
            Vec::new(),
            "Add reference",
            "",
            "System.ValueTuple",
        )
        .unwrap_err();
        assert_eq!(
            err,
            FixDataError::EmptyField {
                field: "assembly_name"
            }
        );
    }

    #[test]
    fn test_package_symbol_is_pending_then_completed() {
        let pending = ImportFix::for_package_symbol(
            &doc(),
            vec![import_edit()],
            "nuget.org",
            "Foo.Bar",
            Some(SmolStr::new("1.2.3")),
        )
        .unwrap();

        // Only the package payload is readable before completion.
        assert_eq!(pending.source(), "nuget.org");
        assert_eq!(pending.name(), "Foo.Bar");
        assert_eq!(pending.version(), Some("1.2.3"));
        assert_eq!(pending.edits().len(), 1);

        let fix = pending
            .into_fix(
                "Install package 'Foo.Bar'",
                [well_known_tags::PACKAGE],
                FixPriority::Low,
            )
            .unwrap();
        assert_eq!(fix.kind(), FixKind::PackageSymbol);
        assert_eq!(fix.title(), "Install package 'Foo.Bar'");
        assert_eq!(fix.priority(), FixPriority::Low);
        match fix.action() {
            FixAction::Package {
                source,
                name,
                version,
            } => {
                assert_eq!(source.as_str(), "nuget.org");
                assert_eq!(name.as_str(), "Foo.Bar");
                assert_eq!(version.as_deref(), Some("1.2.3"));
            }
            other => panic!("wrong action: {other:?}"),
        }
    }

    #[test]
    fn test_package_symbol_without_version_means_latest() {
        let pending =
            ImportFix::for_package_symbol(&doc(), Vec::new(), "nuget.org", "Foo.Bar", None)
                .unwrap();
        assert_eq!(pending.version(), None);

        let fix = pending
            .into_fix("Install 'Foo.Bar'", [well_known_tags::PACKAGE], FixPriority::Low)
            .unwrap();
        match fix.action() {
            FixAction::Package { version, .. } => assert_eq!(version.as_deref(), None),
            other => panic!("wrong action: {other:?}"),
        }
    }

    #[test]
    fn test_package_symbol_rejects_empty_name() {
        let err = ImportFix::for_package_symbol(&doc(), Vec::new(), "nuget.org", "", None)
            .unwrap_err();
        assert_eq!(err, FixDataError::EmptyField { field: "name" });
    }

    #[test]
    fn test_package_completion_validates_title() {
        let pending =
            ImportFix::for_package_symbol(&doc(), Vec::new(), "nuget.org", "Foo.Bar", None)
                .unwrap();
        let err = pending
            .into_fix("", [well_known_tags::PACKAGE], FixPriority::Low)
            .unwrap_err();
        assert_eq!(err, FixDataError::EmptyTitle);
    }

    #[test]
    fn test_kind_as_str() {
        assert_eq!(FixKind::ProjectSymbol.as_str(), "project-symbol");
        assert_eq!(
            FixKind::ReferenceAssemblySymbol.as_str(),
            "reference-assembly-symbol"
        );
    }
}
