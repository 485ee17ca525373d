/// Mock implementations for testing
mod mock_kustomization_store;
mod mock_progress_reporter;

pub use mock_kustomization_store::MockKustomizationStore;
pub use mock_progress_reporter::MockProgressReporter;
