use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Package value object decoded from one TGF node line
///
/// Two packages are the same logical package when their
/// `group_id:artifact_id:version` triple matches. `package_id` is local to
/// the file it came from and `scope` is a property of the edge that pulled
/// the package in, so neither takes part in equality.
#[derive(Debug, Clone, Serialize)]
pub struct Package {
    package_id: String,
    group_id: String,
    artifact_id: String,
    version: String,
    scope: String,
}

impl Package {
    pub fn new(
        package_id: impl Into<String>,
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            package_id: package_id.into(),
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            scope: scope.into(),
        }
    }

    pub fn package_id(&self) -> &str {
        &self.package_id
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Dependency scope label, empty when the node line carried none
    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn has_scope(&self) -> bool {
        !self.scope.is_empty()
    }

    /// `group_id:artifact_id:version`, the key used in dependency trees
    pub fn coordinates(&self) -> String {
        self.to_string()
    }

    fn identity(&self) -> (&str, &str, &str) {
        (&self.group_id, &self.artifact_id, &self.version)
    }
}

impl PartialEq for Package {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Package {}

impl Hash for Package {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}
