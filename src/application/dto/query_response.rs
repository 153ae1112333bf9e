use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use crate::tgf::domain::{DependencyTree, Package};

/// QueryResponse - result DTO from the graph query use case
///
/// Holds domain values; adapters decide how to render them.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryResponse {
    Packages(Vec<Package>),
    Package(Package),
    DependencyIds(Vec<String>),
    Tree { root: Package, tree: DependencyTree },
}

impl QueryResponse {
    /// Renders the response with the given formatter
    pub fn render(&self, formatter: &dyn GraphFormatter) -> Result<String> {
        match self {
            QueryResponse::Packages(packages) => formatter.format_packages(packages),
            QueryResponse::Package(package) => formatter.format_package(package),
            QueryResponse::DependencyIds(ids) => formatter.format_ids(ids),
            QueryResponse::Tree { root, tree } => formatter.format_tree(root, tree),
        }
    }

    /// Number of top-level items in the response
    pub fn item_count(&self) -> usize {
        match self {
            QueryResponse::Packages(packages) => packages.len(),
            QueryResponse::Package(_) => 1,
            QueryResponse::DependencyIds(ids) => ids.len(),
            QueryResponse::Tree { tree, .. } => tree.len(),
        }
    }
}
