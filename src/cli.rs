use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tgf_deps::application::dto::{GraphQuery, OutputFormat};

/// Query package dependency graphs stored in Trivial Graph Format files
#[derive(Parser, Debug)]
#[command(name = "tgf-deps")]
#[command(version)]
#[command(
    about = "Query package dependency graphs stored in Trivial Graph Format (TGF) files",
    long_about = None
)]
pub struct Args {
    /// Path to the TGF file (e.g. from `mvn dependency:tree -DoutputType=tgf`)
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format: text or json [default: text]
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to ./tgf-deps.config.yml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Maximum depth of dependency trees [default: unlimited]
    #[arg(long, global = true, value_parser = parse_max_depth)]
    pub max_depth: Option<usize>,

    /// Show debug diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress progress messages on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Queries supported by the CLI; without one, the root package's tree is printed
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every package in the file, in file order
    Packages,
    /// Show a single package by its TGF id
    Package {
        /// TGF node id of the package
        id: String,
    },
    /// List the direct dependencies of a package
    Deps {
        /// TGF node id of the package
        id: String,
        /// Print raw dependency ids instead of packages
        #[arg(long)]
        ids: bool,
    },
    /// Print the transitive dependency tree of a package
    Tree {
        /// TGF node id of the package (defaults to the root package)
        id: Option<String>,
    },
}

impl Command {
    pub fn into_query(self) -> GraphQuery {
        match self {
            Command::Packages => GraphQuery::Packages,
            Command::Package { id } => GraphQuery::Package { package_id: id },
            Command::Deps { id, ids } => GraphQuery::DirectDependencies {
                package_id: id,
                ids_only: ids,
            },
            Command::Tree { id } => GraphQuery::Tree { package_id: id },
        }
    }
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The query to run, defaulting to the root package's tree
    pub fn query(&self) -> GraphQuery {
        self.command
            .clone()
            .unwrap_or(Command::Tree { id: None })
            .into_query()
    }
}

fn parse_max_depth(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("max depth must be at least 1".to_string()),
        Ok(depth) => Ok(depth),
        Err(_) => Err(format!("'{}' is not a positive integer", value)),
    }
}
