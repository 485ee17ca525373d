/// Kustomization editing core - domain model and pure services
///
/// Nothing in this module touches the filesystem; documents are loaded and
/// persisted through the `KustomizationStore` port.
pub mod domain;
pub mod services;
