use crate::shared::Result;
use crate::tgf::domain::{DependencyTree, Package};

/// GraphFormatter port for rendering query results
///
/// One method per result shape the query engine produces.
pub trait GraphFormatter {
    /// Formats a list of packages (package listing, direct dependencies)
    fn format_packages(&self, packages: &[Package]) -> Result<String>;

    /// Formats a single package with all of its fields
    fn format_package(&self, package: &Package) -> Result<String>;

    /// Formats raw package ids (direct dependency ids)
    fn format_ids(&self, ids: &[String]) -> Result<String>;

    /// Formats a dependency tree rooted at `root`
    fn format_tree(&self, root: &Package, tree: &DependencyTree) -> Result<String>;
}
