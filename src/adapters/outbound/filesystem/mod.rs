/// Filesystem adapter for kustomization files
mod kustomization_file;

pub use kustomization_file::{KustomizationFile, KUSTOMIZATION_FILE_NAMES};
