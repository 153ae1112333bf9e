/// Use cases module containing application orchestration
mod query_graph;

pub use query_graph::QueryGraphUseCase;
