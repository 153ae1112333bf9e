use super::{DependencyNode, DependencyTree, Package};
use crate::shared::error::TgfError;
use crate::shared::Result;
use std::collections::{HashMap, HashSet};

/// Parsed TGF document: the decoded node and edge sections plus lookup indexes
///
/// Built once per parse and never mutated afterwards, so a shared reference
/// can be queried from any number of threads.
#[derive(Debug, Clone)]
pub struct TgfDocument {
    node_lines: Vec<String>,
    edge_lines: Vec<String>,
    packages: Vec<Package>,
    package_index: HashMap<String, usize>,
    adjacency: HashMap<String, Vec<String>>,
    max_depth: Option<usize>,
}

impl TgfDocument {
    /// Assembles a document from already decoded sections
    ///
    /// `packages` must be in node-section order and `edges` in edge-section
    /// order. Fails with `EmptyNodeSection` when there is no root package.
    pub fn new(
        node_lines: Vec<String>,
        edge_lines: Vec<String>,
        packages: Vec<Package>,
        edges: Vec<(String, String)>,
    ) -> Result<Self> {
        if packages.is_empty() {
            return Err(TgfError::EmptyNodeSection.into());
        }

        let mut package_index = HashMap::with_capacity(packages.len());
        for (idx, package) in packages.iter().enumerate() {
            package_index
                .entry(package.package_id().to_string())
                .or_insert(idx);
        }

        let mut adjacency: HashMap<String, Vec<String>> = HashMap::new();
        for (from, to) in edges {
            let targets = adjacency.entry(from).or_default();
            if !targets.contains(&to) {
                targets.push(to);
            }
        }

        Ok(Self {
            node_lines,
            edge_lines,
            packages,
            package_index,
            adjacency,
            max_depth: None,
        })
    }

    /// Caps traversal depth (values below 1 are raised to 1)
    ///
    /// Without a cap, trees are bounded only by the cycle guard.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth.max(1));
        self
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    pub fn node_lines(&self) -> &[String] {
        &self.node_lines
    }

    pub fn edge_lines(&self) -> &[String] {
        &self.edge_lines
    }

    /// The package of the first node line, the entry point of the graph
    pub fn root_package(&self) -> &Package {
        &self.packages[0]
    }

    /// Every package in node-section order, duplicates included
    pub fn list_packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|v| v.len()).sum()
    }

    /// Returns the package of the first node line whose id is `package_id`
    pub fn get_package_by_id(&self, package_id: &str) -> Result<&Package> {
        self.package_index
            .get(package_id)
            .map(|&idx| &self.packages[idx])
            .ok_or_else(|| {
                TgfError::PackageNotFound {
                    package_id: package_id.to_string(),
                }
                .into()
            })
    }

    /// Ids of the packages `package_id` depends on, in edge order
    ///
    /// Unknown ids yield an empty list.
    pub fn get_direct_dependency_ids(&self, package_id: &str) -> &[String] {
        self.adjacency
            .get(package_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Direct dependencies as packages, in node-section order
    ///
    /// Dependency ids with no node line are left out.
    pub fn get_dependencies_by_package_id(&self, package_id: &str) -> Vec<&Package> {
        let dependency_ids: HashSet<&str> = self
            .get_direct_dependency_ids(package_id)
            .iter()
            .map(String::as_str)
            .collect();
        if dependency_ids.is_empty() {
            return Vec::new();
        }

        self.packages
            .iter()
            .filter(|package| dependency_ids.contains(package.package_id()))
            .collect()
    }

    /// One-level tree: each direct dependency mapped to an empty subtree
    pub fn get_dependencies(&self, package_id: &str) -> DependencyTree {
        let mut tree = DependencyTree::new();
        for dependency in self.get_dependencies_by_package_id(package_id) {
            tree.insert(dependency.coordinates(), DependencyTree::new());
        }
        tree
    }

    /// Full transitive dependency tree keyed by `group:artifact:version`
    pub fn dependency_tree(&self, package_id: &str) -> DependencyTree {
        DependencyTree::from_nodes(&self.dependency_nodes(package_id))
    }

    /// Transitive dependencies as resolved nodes, duplicates preserved
    ///
    /// A package already on the current path gets an empty subtree, and so
    /// does one sitting at level `max_depth` when a cap is set.
    pub fn dependency_nodes(&self, package_id: &str) -> Vec<DependencyNode> {
        let mut path = vec![package_id];
        self.collect_dependency_nodes(package_id, &mut path)
    }

    fn collect_dependency_nodes<'a>(
        &'a self,
        package_id: &str,
        path: &mut Vec<&'a str>,
    ) -> Vec<DependencyNode> {
        self.get_dependencies_by_package_id(package_id)
            .into_iter()
            .map(|dependency| {
                let dependency_id = dependency.package_id();

                if path.contains(&dependency_id) {
                    tracing::warn!(
                        package_id = dependency_id,
                        package = %dependency,
                        "dependency cycle detected; subtree truncated"
                    );
                    return DependencyNode::leaf(dependency.clone());
                }
                if let Some(max_depth) = self.max_depth.filter(|&cap| path.len() >= cap) {
                    if !self.get_direct_dependency_ids(dependency_id).is_empty() {
                        tracing::warn!(
                            package_id = dependency_id,
                            max_depth,
                            "maximum dependency depth reached; subtree truncated"
                        );
                    }
                    return DependencyNode::leaf(dependency.clone());
                }

                path.push(dependency_id);
                let children = self.collect_dependency_nodes(dependency_id, path);
                path.pop();
                DependencyNode::new(dependency.clone(), children)
            })
            .collect()
    }
}
