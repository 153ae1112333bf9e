use super::Package;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One resolved dependency together with its own dependencies
///
/// Unlike `DependencyTree`, a list of nodes keeps every graph node even when
/// two of them share the same coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyNode {
    pub package: Package,
    pub dependencies: Vec<DependencyNode>,
}

impl DependencyNode {
    pub fn new(package: Package, dependencies: Vec<DependencyNode>) -> Self {
        Self {
            package,
            dependencies,
        }
    }

    pub fn leaf(package: Package) -> Self {
        Self::new(package, Vec::new())
    }
}

/// Dependency tree keyed by `group:artifact:version`
///
/// Entries keep insertion order. Inserting a key that is already present
/// replaces its subtree in place, so packages sharing coordinates collapse
/// into a single entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyTree {
    entries: Vec<(String, DependencyTree)>,
}

impl DependencyTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders resolved nodes into the keyed form
    pub fn from_nodes(nodes: &[DependencyNode]) -> Self {
        let mut tree = Self::new();
        for node in nodes {
            tree.insert(
                node.package.coordinates(),
                Self::from_nodes(&node.dependencies),
            );
        }
        tree
    }

    pub fn insert(&mut self, key: impl Into<String>, subtree: DependencyTree) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = subtree,
            None => self.entries.push((key, subtree)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&DependencyTree> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, subtree)| subtree)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DependencyTree)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries at every level of the tree
    pub fn total_count(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, subtree)| 1 + subtree.total_count())
            .sum()
    }

    /// Length of the longest key path; 0 for an empty tree
    pub fn depth(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, subtree)| 1 + subtree.depth())
            .max()
            .unwrap_or(0)
    }
}

impl Serialize for DependencyTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, subtree) in &self.entries {
            map.serialize_entry(key, subtree)?;
        }
        map.end()
    }
}
