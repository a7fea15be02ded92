use tracing::debug;

use crate::domain::ChangeKind;
use crate::error::{ChangelogError, Result};

/// Name of the pending, not yet released version
pub const UNRELEASED: &str = "Unreleased";

/// Item the `init` template starts with
pub const FIRST_ITEM: &str = "First commit.";

/// A changelog in its entirety, with every version it tracks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changelog {
    pub title: String,
    pub preamble: String,
    pub versions: Vec<Version>,
}

/// The changes recorded for one release (or for `Unreleased`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Version {
    /// `Unreleased` or a `MAJOR.MINOR.PATCH` version
    pub name: String,
    /// Release date as `YYYY-MM-DD`; empty when there is none
    pub date: String,
    pub changes: Vec<ChangeCollection>,
}

/// Items grouped under one type of changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeCollection {
    pub kind: ChangeKind,
    pub items: Vec<String>,
}

/// Where `add_item` puts an `Unreleased` version it has to create
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnreleasedPlacement {
    /// Append after every existing version
    #[default]
    End,
    /// Insert before every existing version
    Front,
}

impl Changelog {
    /// Create an empty changelog
    pub fn new() -> Self {
        Self::default()
    }

    /// The document `init` produces: one `Unreleased` version with a first item
    pub fn template(title: impl Into<String>, preamble: impl Into<String>) -> Self {
        Changelog {
            title: title.into(),
            preamble: preamble.into(),
            versions: vec![Version {
                name: UNRELEASED.to_string(),
                date: String::new(),
                changes: vec![ChangeCollection {
                    kind: ChangeKind::Added,
                    items: vec![FIRST_ITEM.to_string()],
                }],
            }],
        }
    }

    /// First version whose name matches, in document order
    pub fn find_version(&self, name: &str) -> Option<&Version> {
        self.versions.iter().find(|v| v.name == name)
    }

    pub fn find_version_mut(&mut self, name: &str) -> Option<&mut Version> {
        self.versions.iter_mut().find(|v| v.name == name)
    }

    /// Add a message under `kind` in the `Unreleased` version.
    ///
    /// A missing `Unreleased` version is appended at the end of the list.
    pub fn add_item(&mut self, kind: ChangeKind, message: impl Into<String>) {
        self.add_item_with(kind, message, UnreleasedPlacement::End);
    }

    /// Same as [`Changelog::add_item`], choosing where a new `Unreleased` goes.
    ///
    /// The message is prepended, so the newest item is listed first.
    pub fn add_item_with(
        &mut self,
        kind: ChangeKind,
        message: impl Into<String>,
        placement: UnreleasedPlacement,
    ) {
        let index = match self.versions.iter().position(Version::is_unreleased) {
            Some(index) => index,
            None => {
                debug!(?placement, "creating missing Unreleased version");
                match placement {
                    UnreleasedPlacement::End => {
                        self.versions.push(Version::unreleased());
                        self.versions.len() - 1
                    }
                    UnreleasedPlacement::Front => {
                        self.versions.insert(0, Version::unreleased());
                        0
                    }
                }
            }
        };

        let version = &mut self.versions[index];
        if version.change_collection(kind).is_none() {
            version.changes.push(ChangeCollection::new(kind));
        }
        if let Some(collection) = version.change_collection_mut(kind) {
            collection.items.insert(0, message.into());
        }
    }

    /// Turn `Unreleased` into the released version `name`, dated `date`.
    ///
    /// A fresh, empty `Unreleased` is put at the top of the changelog.
    pub fn release(&mut self, name: impl Into<String>, date: impl Into<String>) -> Result<()> {
        let version = self
            .find_version_mut(UNRELEASED)
            .ok_or(ChangelogError::NoUnreleased)?;
        version.name = name.into();
        version.date = date.into();
        debug!(name = %version.name, date = %version.date, "released Unreleased");

        self.versions.insert(0, Version::unreleased());
        Ok(())
    }
}

impl Version {
    /// Create a version with no date and no changes
    pub fn new(name: impl Into<String>) -> Self {
        Version {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Create an empty `Unreleased` version
    pub fn unreleased() -> Self {
        Self::new(UNRELEASED)
    }

    pub fn is_unreleased(&self) -> bool {
        self.name == UNRELEASED
    }

    /// First collection of the given kind, in document order
    pub fn change_collection(&self, kind: ChangeKind) -> Option<&ChangeCollection> {
        self.changes.iter().find(|c| c.kind == kind)
    }

    pub fn change_collection_mut(&mut self, kind: ChangeKind) -> Option<&mut ChangeCollection> {
        self.changes.iter_mut().find(|c| c.kind == kind)
    }
}

impl ChangeCollection {
    /// Create an empty collection
    pub fn new(kind: ChangeKind) -> Self {
        ChangeCollection {
            kind,
            items: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn released(name: &str, date: &str) -> Version {
        Version {
            name: name.to_string(),
            date: date.to_string(),
            changes: vec![ChangeCollection {
                kind: ChangeKind::Fixed,
                items: vec!["item three".to_string()],
            }],
        }
    }

    #[test]
    fn test_add_item_prepends() {
        let mut changelog = Changelog::new();
        changelog.versions.push(Version {
            name: UNRELEASED.to_string(),
            date: String::new(),
            changes: vec![ChangeCollection::new(ChangeKind::Added)],
        });

        changelog.add_item(ChangeKind::Added, "a");
        changelog.add_item(ChangeKind::Added, "b");

        let added = changelog
            .find_version(UNRELEASED)
            .and_then(|v| v.change_collection(ChangeKind::Added))
            .unwrap();
        assert_eq!(added.items, vec!["b", "a"]);
    }

    #[test]
    fn test_add_item_creates_missing_collection() {
        let mut changelog = Changelog::template("Changelog", "");
        changelog.add_item(ChangeKind::Security, "Patch CVE");

        let unreleased = changelog.find_version(UNRELEASED).unwrap();
        assert_eq!(unreleased.changes.len(), 2);
        assert_eq!(unreleased.changes[1].kind, ChangeKind::Security);
        assert_eq!(unreleased.changes[1].items, vec!["Patch CVE"]);
    }

    #[test]
    fn test_add_item_appends_missing_unreleased() {
        let mut changelog = Changelog::new();
        changelog.versions.push(released("1.0.0", "2024-01-01"));

        changelog.add_item(ChangeKind::Added, "new");

        assert_eq!(changelog.versions.len(), 2);
        assert_eq!(changelog.versions[0].name, "1.0.0");
        assert!(changelog.versions[1].is_unreleased());
        assert_eq!(changelog.versions[1].changes[0].items, vec!["new"]);
    }

    #[test]
    fn test_add_item_front_placement() {
        let mut changelog = Changelog::new();
        changelog.versions.push(released("1.0.0", "2024-01-01"));

        changelog.add_item_with(ChangeKind::Added, "new", UnreleasedPlacement::Front);

        assert!(changelog.versions[0].is_unreleased());
        assert_eq!(changelog.versions[1].name, "1.0.0");
    }

    #[test]
    fn test_add_item_uses_first_unreleased() {
        let mut changelog = Changelog::new();
        changelog.versions.push(Version::unreleased());
        changelog.versions.push(Version::unreleased());

        changelog.add_item(ChangeKind::Fixed, "x");

        assert_eq!(changelog.versions[0].changes.len(), 1);
        assert!(changelog.versions[1].changes.is_empty());
    }

    #[test]
    fn test_release_renames_and_reinserts_unreleased() {
        let mut changelog = Changelog::template("Changelog", "Notes.");
        changelog.versions.push(released("0.9.0", "2023-12-01"));

        changelog.release("1.0.0", "2024-03-01").unwrap();

        assert_eq!(changelog.versions.len(), 3);
        assert_eq!(changelog.versions[0], Version::unreleased());
        let renamed = &changelog.versions[1];
        assert_eq!(renamed.name, "1.0.0");
        assert_eq!(renamed.date, "2024-03-01");
        assert_eq!(renamed.changes[0].kind, ChangeKind::Added);
        assert_eq!(renamed.changes[0].items, vec![FIRST_ITEM]);
        assert_eq!(changelog.versions[2].name, "0.9.0");
    }

    #[test]
    fn test_release_without_unreleased_fails() {
        let mut changelog = Changelog::new();
        changelog.versions.push(released("1.0.0", "2024-01-01"));

        let err = changelog.release("1.1.0", "2024-02-01").unwrap_err();
        assert!(matches!(err, ChangelogError::NoUnreleased));
        assert_eq!(changelog.versions.len(), 1);
    }

    #[test]
    fn test_find_version_returns_first_match() {
        let mut changelog = Changelog::new();
        changelog.versions.push(released("1.0.0", "2024-01-01"));
        changelog.versions.push(released("1.0.0", "2023-01-01"));

        assert_eq!(changelog.find_version("1.0.0").unwrap().date, "2024-01-01");
        assert!(changelog.find_version("2.0.0").is_none());
    }

    #[test]
    fn test_change_collection_lookup() {
        let version = released("1.0.0", "");
        assert!(version.change_collection(ChangeKind::Fixed).is_some());
        assert!(version.change_collection(ChangeKind::Added).is_none());
    }

    #[test]
    fn test_change_collection_mut_returns_first_match() {
        let mut version = released("1.0.0", "");
        version.changes.push(ChangeCollection::new(ChangeKind::Fixed));

        version
            .change_collection_mut(ChangeKind::Fixed)
            .unwrap()
            .items
            .push("more".to_string());

        assert_eq!(version.changes[0].items, vec!["item three", "more"]);
        assert!(version.changes[1].items.is_empty());
        assert!(version.change_collection_mut(ChangeKind::Removed).is_none());
    }
}
