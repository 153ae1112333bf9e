pub mod dependency_tree;
pub mod document;
pub mod package;

pub use dependency_tree::{DependencyNode, DependencyTree};
pub use document::TgfDocument;
pub use package::Package;
