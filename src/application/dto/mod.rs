/// Data Transfer Objects for application layer
///
/// DTOs carry requests into the use case and results back out to the
/// adapters, keeping the CLI and formatters away from the parser.
mod output_format;
mod query_request;
mod query_response;

pub use output_format::OutputFormat;
pub use query_request::{GraphQuery, QueryRequest};
pub use query_response::QueryResponse;
