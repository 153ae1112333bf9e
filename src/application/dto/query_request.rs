use std::path::PathBuf;

/// The query to run against a parsed TGF document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphQuery {
    /// Every package, in file order
    Packages,
    /// A single package by id
    Package { package_id: String },
    /// Direct dependencies of a package, as packages or as raw ids
    DirectDependencies { package_id: String, ids_only: bool },
    /// Transitive dependency tree; `None` means the root package
    Tree { package_id: Option<String> },
}

/// QueryRequest - request DTO for the graph query use case
#[derive(Debug, Clone)]
pub struct QueryRequest {
    /// Path to the TGF file
    pub tgf_path: PathBuf,
    /// Query to answer once the file is parsed
    pub query: GraphQuery,
}

impl QueryRequest {
    pub fn new(tgf_path: PathBuf, query: GraphQuery) -> Self {
        Self { tgf_path, query }
    }
}
