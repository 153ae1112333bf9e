/// Result alias used across the crate.
///
/// Typed failures are `TgfError` values wrapped in `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
