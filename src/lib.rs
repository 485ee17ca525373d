//! kustedit - edit kustomization files from the command line
//!
//! This library sets Helm chart versions inside kustomization files,
//! following hexagonal architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`kustomization`): document model and pure editing services
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use kustedit::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let store = KustomizationFile::discover(Path::new("."))?;
//! let use_case = SetHelmVersionUseCase::new(store, StderrProgressReporter::new());
//!
//! let request = SetHelmVersionRequest::new(vec!["redis=17.3.0".to_string()]);
//! let response = use_case.execute(request)?;
//! println!("updated {} entries", response.updated_count());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod kustomization;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{KustomizationFile, KUSTOMIZATION_FILE_NAMES};
    pub use crate::application::dto::{SetHelmVersionRequest, SetHelmVersionResponse};
    pub use crate::application::use_cases::SetHelmVersionUseCase;
    pub use crate::kustomization::domain::{
        ChartUpdate, ChartVersionMap, HelmChart, Kustomization, UpdateOutcome,
    };
    pub use crate::kustomization::services::HelmVersionUpdater;
    pub use crate::ports::outbound::{KustomizationStore, ProgressReporter};
    pub use crate::shared::error::{
        ChartArgumentError, DocumentError, ExitCode, KustomizationError,
    };
    pub use crate::shared::Result;
}
