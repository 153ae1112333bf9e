/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: file system access,
/// console progress output, and result formatters.
pub mod outbound;
