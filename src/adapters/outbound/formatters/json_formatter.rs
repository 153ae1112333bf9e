use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use crate::tgf::domain::{DependencyTree, Package};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// JsonFormatter adapter for machine-readable output
///
/// Packages serialize as full records (`package_id`, `group_id`,
/// `artifact_id`, `version`, `scope`); trees serialize as nested objects
/// keyed by `group:artifact:version`, wrapped in a single entry for the root.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
        let mut json = serde_json::to_string_pretty(value)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON output: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}

/// A tree wrapped in a single entry keyed by its root's coordinates
struct RootedTree<'a> {
    root: &'a Package,
    tree: &'a DependencyTree,
}

impl Serialize for RootedTree<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.root.coordinates(), self.tree)?;
        map.end()
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for JsonFormatter {
    fn format_packages(&self, packages: &[Package]) -> Result<String> {
        Self::to_pretty_json(packages)
    }

    fn format_package(&self, package: &Package) -> Result<String> {
        Self::to_pretty_json(package)
    }

    fn format_ids(&self, ids: &[String]) -> Result<String> {
        Self::to_pretty_json(ids)
    }

    fn format_tree(&self, root: &Package, tree: &DependencyTree) -> Result<String> {
        Self::to_pretty_json(&RootedTree { root, tree })
    }
}
