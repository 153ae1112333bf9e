use crate::application::dto::{GraphQuery, QueryRequest, QueryResponse};
use crate::ports::outbound::{ProgressReporter, TgfReader};
use crate::shared::Result;
use crate::tgf::services::TgfParser;

/// QueryGraphUseCase - parses a TGF file and answers one query about it
///
/// Infrastructure is injected through generics, like every use case in
/// this crate.
///
/// # Type Parameters
/// * `R` - TgfReader implementation
/// * `PR` - ProgressReporter implementation
pub struct QueryGraphUseCase<R, PR> {
    parser: TgfParser<R>,
    progress_reporter: PR,
}

impl<R, PR> QueryGraphUseCase<R, PR>
where
    R: TgfReader,
    PR: ProgressReporter,
{
    /// Creates a new QueryGraphUseCase with injected dependencies
    pub fn new(reader: R, progress_reporter: PR) -> Self {
        Self {
            parser: TgfParser::new(reader),
            progress_reporter,
        }
    }

    /// Caps the depth of dependency trees built by this use case
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.parser = self.parser.with_max_depth(max_depth);
        self
    }

    /// Executes the query use case
    ///
    /// Step 1 parses the file (replacing whatever was parsed before), step 2
    /// runs the requested query against the parsed document.
    pub fn execute(&mut self, request: QueryRequest) -> Result<QueryResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading TGF file: {}",
            request.tgf_path.display()
        ));

        self.parser.parse(&request.tgf_path)?;

        let document = self.parser.document()?;
        self.progress_reporter.report(&format!(
            "✅ Detected {} package(s) and {} dependency edge(s)",
            document.package_count(),
            document.edge_count()
        ));

        let response = self.run_query(&request.query)?;
        self.progress_reporter.report_completion(&format!(
            "🔍 Query returned {} item(s)",
            response.item_count()
        ));

        Ok(response)
    }

    fn run_query(&self, query: &GraphQuery) -> Result<QueryResponse> {
        match query {
            GraphQuery::Packages => Ok(QueryResponse::Packages(self.parser.list_packages()?)),
            GraphQuery::Package { package_id } => Ok(QueryResponse::Package(
                self.parser.get_package_by_id(package_id)?,
            )),
            GraphQuery::DirectDependencies {
                package_id,
                ids_only: true,
            } => Ok(QueryResponse::DependencyIds(
                self.parser.get_direct_dependency_ids(package_id)?,
            )),
            GraphQuery::DirectDependencies {
                package_id,
                ids_only: false,
            } => Ok(QueryResponse::Packages(
                self.parser.get_dependencies_by_package_id(package_id)?,
            )),
            GraphQuery::Tree { package_id } => {
                let root = match package_id {
                    Some(id) => self.parser.get_package_by_id(id)?,
                    None => self.parser.root_package()?.clone(),
                };
                self.progress_reporter.report(&format!(
                    "📊 Building dependency tree for {}...",
                    root
                ));
                let tree = self.parser.dependency_tree(root.package_id())?;
                Ok(QueryResponse::Tree { root, tree })
            }
        }
    }
}
