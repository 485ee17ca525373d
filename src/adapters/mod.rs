/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the ports: the kustomization file on disk and
/// the terminal.
pub mod outbound;
