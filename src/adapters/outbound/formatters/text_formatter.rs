use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use crate::tgf::domain::{DependencyTree, Package};

/// Branch drawn before a child that has siblings after it
const BRANCH: &str = "├── ";
/// Branch drawn before the last child
const LAST_BRANCH: &str = "└── ";
/// Indent under a child that has siblings after it
const PIPE_INDENT: &str = "│   ";
/// Indent under the last child
const BLANK_INDENT: &str = "    ";

/// TextFormatter adapter for human-readable terminal output
///
/// Packages render as `id group:artifact:version [scope]` lines and trees
/// as an indented outline similar to `mvn dependency:tree`.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn package_line(package: &Package) -> String {
        if package.has_scope() {
            format!(
                "{} {} [{}]",
                package.package_id(),
                package,
                package.scope()
            )
        } else {
            format!("{} {}", package.package_id(), package)
        }
    }

    /// Renders every entry of `tree` below the current `prefix`
    fn render_tree(output: &mut String, tree: &DependencyTree, prefix: &str) {
        let count = tree.len();
        for (idx, (key, subtree)) in tree.iter().enumerate() {
            let is_last = idx + 1 == count;
            let (branch, indent) = if is_last {
                (LAST_BRANCH, BLANK_INDENT)
            } else {
                (BRANCH, PIPE_INDENT)
            };

            output.push_str(prefix);
            output.push_str(branch);
            output.push_str(key);
            output.push('\n');

            Self::render_tree(output, subtree, &format!("{}{}", prefix, indent));
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for TextFormatter {
    fn format_packages(&self, packages: &[Package]) -> Result<String> {
        if packages.is_empty() {
            return Ok("(no packages)\n".to_string());
        }

        let mut output = String::new();
        for package in packages {
            output.push_str(&Self::package_line(package));
            output.push('\n');
        }
        Ok(output)
    }

    fn format_package(&self, package: &Package) -> Result<String> {
        let scope = if package.has_scope() {
            package.scope()
        } else {
            "-"
        };

        let mut output = String::new();
        output.push_str(&format!("Package ID:  {}\n", package.package_id()));
        output.push_str(&format!("Group ID:    {}\n", package.group_id()));
        output.push_str(&format!("Artifact ID: {}\n", package.artifact_id()));
        output.push_str(&format!("Version:     {}\n", package.version()));
        output.push_str(&format!("Scope:       {}\n", scope));
        Ok(output)
    }

    fn format_ids(&self, ids: &[String]) -> Result<String> {
        if ids.is_empty() {
            return Ok("(no dependencies)\n".to_string());
        }
        Ok(ids.iter().map(|id| format!("{}\n", id)).collect())
    }

    fn format_tree(&self, root: &Package, tree: &DependencyTree) -> Result<String> {
        let mut output = format!("{}\n", root);
        if tree.is_empty() {
            output.push_str(LAST_BRANCH);
            output.push_str("(no dependencies)\n");
        } else {
            Self::render_tree(&mut output, tree, "");
        }
        Ok(output)
    }
}
