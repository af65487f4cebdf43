//! Display metadata for suggestions.
//!
//! The presentation layer renders a fix from three pieces of data: a title
//! string, an ordered set of glyph tags, and a ranking priority. Three of the
//! four fix kinds carry these from construction; the package kind supplies
//! them at completion time (see [`PendingPackageFix`]).
//!
//! [`PendingPackageFix`]: super::PendingPackageFix

use indexmap::IndexSet;
use smol_str::SmolStr;

/// Ranking weight for a suggestion in the fix list.
///
/// Higher sorts earlier. [`FixPriority::Medium`] is the default for
/// ordinary in-solution fixes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FixPriority {
    /// Shown last; used for fixes that pull in new references.
    Lowest,
    Low,
    #[default]
    Medium,
    High,
}

impl FixPriority {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lowest => "lowest",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Well-known glyph tags understood by the presentation layer.
pub mod well_known_tags {
    /// Fix adds a project-to-project reference.
    pub const PROJECT_REFERENCE: &str = "project-reference";
    /// Fix adds a metadata (binary) reference.
    pub const METADATA_REFERENCE: &str = "metadata-reference";
    /// Fix adds an assembly reference resolved from a facade.
    pub const ADD_REFERENCE: &str = "add-reference";
    /// Fix installs a package.
    pub const PACKAGE: &str = "package";
    /// Plain import insertion into the current document.
    pub const IMPORT: &str = "import";
}

/// Title, tags, and priority for one suggestion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixDisplay {
    title: SmolStr,
    tags: IndexSet<SmolStr>,
    priority: FixPriority,
}

impl FixDisplay {
    /// Bundle display metadata. Callers validate the title; duplicate tags
    /// collapse, first occurrence keeps its position.
    pub(crate) fn new<I, T>(title: SmolStr, tags: I, priority: FixPriority) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<SmolStr>,
    {
        Self {
            title,
            tags: tags.into_iter().map(Into::into).collect(),
            priority,
        }
    }

    /// String shown in the suggestion list.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Glyph tags, in insertion order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(SmolStr::as_str)
    }

    /// Check whether a tag is present.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Ranking weight.
    pub fn priority(&self) -> FixPriority {
        self.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(FixPriority::Lowest < FixPriority::Low);
        assert!(FixPriority::Low < FixPriority::Medium);
        assert!(FixPriority::Medium < FixPriority::High);
        assert_eq!(FixPriority::default(), FixPriority::Medium);
    }

    #[test]
    fn test_priority_as_str() {
        assert_eq!(FixPriority::Lowest.as_str(), "lowest");
        assert_eq!(FixPriority::High.as_str(), "high");
    }

    #[test]
    fn test_tags_keep_insertion_order_and_dedup() {
        let display = FixDisplay::new(
            SmolStr::new("Add import"),
            [
                well_known_tags::IMPORT,
                well_known_tags::PACKAGE,
                well_known_tags::IMPORT,
            ],
            FixPriority::Medium,
        );
        let tags: Vec<_> = display.tags().collect();
        assert_eq!(tags, vec!["import", "package"]);
        assert!(display.has_tag("package"));
        assert!(!display.has_tag("project-reference"));
    }
}
