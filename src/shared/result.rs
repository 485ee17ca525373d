/// Result alias used by every layer of kustedit.
///
/// Errors are carried as `anyhow::Error` so typed errors from the domain
/// (`ChartArgumentError`, `KustomizationError`) can be recovered with `downcast_ref`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
