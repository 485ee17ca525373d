/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define what the application core needs from the outside
/// world: somewhere to load and save the document, and somewhere to report to.
pub mod kustomization_store;
pub mod progress_reporter;

pub use kustomization_store::KustomizationStore;
pub use progress_reporter::ProgressReporter;
