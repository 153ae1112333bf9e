/// Application layer - Use cases and DTOs
///
/// Orchestrates the TGF core and reaches infrastructure only through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
