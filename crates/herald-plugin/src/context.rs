//! Release event supplied by the host.

use serde::{Deserialize, Serialize};

/// A conventional commit included in a release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConventionalCommit {
    /// Commit hash.
    pub hash: String,

    /// Commit type (e.g., "feat", "fix").
    #[serde(rename = "type")]
    pub r#type: String,

    /// Optional scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// Commit description.
    pub description: String,

    /// Whether the commit is a breaking change.
    #[serde(default)]
    pub breaking: bool,
}

impl ConventionalCommit {
    /// Creates a new commit.
    #[must_use]
    pub fn new(
        hash: impl Into<String>,
        r#type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            hash: hash.into(),
            r#type: r#type.into(),
            scope: None,
            description: description.into(),
            breaking: false,
        }
    }

    /// Sets the scope.
    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Marks the commit as breaking.
    #[must_use]
    pub fn breaking(mut self, breaking: bool) -> Self {
        self.breaking = breaking;
        self
    }
}

/// Commits of a release grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedChanges {
    /// New features.
    #[serde(default)]
    pub features: Vec<ConventionalCommit>,

    /// Bug fixes.
    #[serde(default)]
    pub fixes: Vec<ConventionalCommit>,

    /// Breaking changes.
    #[serde(default)]
    pub breaking: Vec<ConventionalCommit>,
}

/// The release being reported. Read-only to notifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseContext {
    /// The released version (e.g., "1.2.3").
    pub version: String,

    /// The git tag (e.g., "v1.2.3").
    pub tag_name: String,

    /// The branch the release was cut from.
    pub branch: String,

    /// The release type (e.g., "minor").
    pub release_type: String,

    /// Free-form release notes.
    pub release_notes: String,

    /// Categorized changes, when the host computed them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<CategorizedChanges>,
}

impl ReleaseContext {
    /// Creates a context for the given version.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Self::default()
        }
    }

    /// Sets the tag name.
    #[must_use]
    pub fn with_tag(mut self, tag_name: impl Into<String>) -> Self {
        self.tag_name = tag_name.into();
        self
    }

    /// Sets the branch.
    #[must_use]
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    /// Sets the release type.
    #[must_use]
    pub fn with_release_type(mut self, release_type: impl Into<String>) -> Self {
        self.release_type = release_type.into();
        self
    }

    /// Sets the release notes.
    #[must_use]
    pub fn with_release_notes(mut self, notes: impl Into<String>) -> Self {
        self.release_notes = notes.into();
        self
    }

    /// Sets the categorized changes.
    #[must_use]
    pub fn with_changes(mut self, changes: CategorizedChanges) -> Self {
        self.changes = Some(changes);
        self
    }
}
