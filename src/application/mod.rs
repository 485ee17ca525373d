/// Application layer - Use cases and DTOs
///
/// Orchestrates the kustomization domain and talks to infrastructure only
/// through ports.
pub mod dto;
pub mod use_cases;
