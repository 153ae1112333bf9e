/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist: the CLI drives the application
/// layer directly through `QueryGraphUseCase`.
pub mod outbound;
