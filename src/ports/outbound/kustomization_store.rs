use crate::kustomization::domain::Kustomization;
use crate::shared::Result;

/// KustomizationStore port for loading and saving a kustomization document
///
/// The use case performs one read followed by one write; implementations
/// provide no locking between the two.
pub trait KustomizationStore {
    /// Human-readable location of the document (e.g. a file path)
    fn location(&self) -> String;

    /// Loads the current document
    ///
    /// # Errors
    /// Returns an error if the document cannot be read or parsed
    fn read(&self) -> Result<Kustomization>;

    /// Persists `kustomization`, replacing the stored document
    ///
    /// # Errors
    /// Returns an error if the document cannot be serialized or written
    fn write(&self, kustomization: &Kustomization) -> Result<()>;
}
