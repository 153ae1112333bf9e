//! tgf-deps - query dependency graphs stored in Trivial Graph Format files
//!
//! Dependency-analysis tools such as `mvn dependency:tree -DoutputType=tgf`
//! emit a node list, a `#` separator line, and an edge list. This library
//! parses that text into packages and answers queries over the graph:
//! listing packages, looking one up by id, direct dependencies, and the full
//! transitive dependency tree.
//!
//! # Architecture
//!
//! - **Core** (`tgf`): package values, the parsed document, and the parser
//! - **Application Layer** (`application`): the query use case and DTOs
//! - **Ports** (`ports`): interfaces for file access, formatting, and output
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): error types and file validation helpers
//!
//! # Example
//!
//! ```no_run
//! use tgf_deps::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let mut parser = TgfParser::new(FileSystemReader::new());
//! parser.parse(Path::new("dependencies.tgf"))?;
//!
//! let root = parser.root_package()?.clone();
//! for package in parser.get_dependencies_by_package_id(root.package_id())? {
//!     println!("{} depends on {}", root, package);
//! }
//!
//! let tree = parser.dependency_tree(root.package_id())?;
//! println!("{}", TextFormatter::new().format_tree(&root, &tree)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;
pub mod tgf;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::application::dto::{GraphQuery, OutputFormat, QueryRequest, QueryResponse};
    pub use crate::application::use_cases::QueryGraphUseCase;
    pub use crate::ports::outbound::{GraphFormatter, OutputPresenter, ProgressReporter, TgfReader};
    pub use crate::shared::error::TgfError;
    pub use crate::shared::Result;
    pub use crate::tgf::domain::{DependencyNode, DependencyTree, Package, TgfDocument};
    pub use crate::tgf::services::{parse_document, TgfParser};
}
