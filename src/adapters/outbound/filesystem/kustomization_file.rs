use crate::kustomization::domain::Kustomization;
use crate::ports::outbound::KustomizationStore;
use crate::shared::error::{DocumentError, KustomizationError};
use crate::shared::security::{check_readable_file, check_writable_target};
use crate::shared::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File names recognized as a kustomization file, in lookup order
pub const KUSTOMIZATION_FILE_NAMES: [&str; 3] =
    ["kustomization.yaml", "kustomization.yml", "Kustomization"];

/// KustomizationFile adapter storing the document in a YAML file
///
/// The file text is written back as the document holds it. Writes go to a
/// temporary file in the same directory which is then renamed over the
/// original, so readers never observe a partially written file.
#[derive(Debug, Clone)]
pub struct KustomizationFile {
    path: PathBuf,
}

impl KustomizationFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Finds the kustomization file in `dir`
    ///
    /// The first existing name from [`KUSTOMIZATION_FILE_NAMES`] wins.
    pub fn discover(dir: &Path) -> Result<Self> {
        KUSTOMIZATION_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| fs::symlink_metadata(candidate).is_ok())
            .map(Self::new)
            .ok_or_else(|| {
                KustomizationError::NotFound {
                    dir: dir.to_path_buf(),
                    tried: KUSTOMIZATION_FILE_NAMES.join(", "),
                }
                .into()
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, details: impl ToString) -> anyhow::Error {
        KustomizationError::FileWriteError {
            path: self.path.clone(),
            details: details.to_string(),
        }
        .into()
    }
}

impl KustomizationStore for KustomizationFile {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<Kustomization> {
        let read_error = |details: String| KustomizationError::FileReadError {
            path: self.path.clone(),
            details,
        };

        check_readable_file(&self.path).map_err(|e| read_error(e.to_string()))?;
        let content = fs::read_to_string(&self.path).map_err(|e| read_error(e.to_string()))?;

        let kustomization = Kustomization::parse(&content).map_err(|e| match e {
            DocumentError::NotAMapping(found) => KustomizationError::NotAMapping {
                path: self.path.clone(),
                found: found.to_string(),
            },
            other => KustomizationError::ParseError {
                path: self.path.clone(),
                details: other.to_string(),
            },
        })?;
        Ok(kustomization)
    }

    fn write(&self, kustomization: &Kustomization) -> Result<()> {
        check_writable_target(&self.path).map_err(|e| self.write_error(e))?;

        let dir = match self.path.parent() {
            Some(parent) if parent != Path::new("") => parent,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(dir).map_err(|e| self.write_error(e))?;

        // Keep the original file mode; temp files are created 0600.
        if let Ok(metadata) = fs::metadata(&self.path) {
            temp.as_file()
                .set_permissions(metadata.permissions())
                .map_err(|e| self.write_error(e))?;
        }

        temp.write_all(kustomization.as_str().as_bytes())
            .map_err(|e| self.write_error(e))?;
        temp.persist(&self.path)
            .map_err(|e| self.write_error(e.error))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CONTENT: &str = "helmCharts:\n- name: mychart\n  version: old-version\n";

    #[test]
    fn test_discover_prefers_yaml_extension() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("kustomization.yml"), CONTENT).unwrap();
        fs::write(temp_dir.path().join("kustomization.yaml"), CONTENT).unwrap();

        let file = KustomizationFile::discover(temp_dir.path()).unwrap();
        assert_eq!(file.path(), temp_dir.path().join("kustomization.yaml"));
    }

    #[test]
    fn test_discover_capitalized_name() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("Kustomization"), CONTENT).unwrap();

        let file = KustomizationFile::discover(temp_dir.path()).unwrap();
        assert_eq!(file.path(), temp_dir.path().join("Kustomization"));
    }

    #[test]
    fn test_discover_not_found() {
        let temp_dir = TempDir::new().unwrap();

        let result = KustomizationFile::discover(temp_dir.path());
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<KustomizationError>(),
            Some(KustomizationError::NotFound { .. })
        ));
        assert!(err.to_string().contains("kustomization.yaml, kustomization.yml, Kustomization"));
    }

    #[test]
    fn test_read_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kustomization.yaml");
        fs::write(&path, CONTENT).unwrap();

        let kustomization = KustomizationFile::new(path).read().unwrap();
        let charts = kustomization.helm_charts();
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].version.as_deref(), Some("old-version"));
    }

    #[test]
    fn test_read_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kustomization.yaml");
        fs::write(&path, "").unwrap();

        let kustomization = KustomizationFile::new(path).read().unwrap();
        assert!(kustomization.as_str().is_empty());
        assert!(kustomization.helm_charts().is_empty());
    }

    #[test]
    fn test_read_keeps_file_text() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kustomization.yaml");
        let content = "# managed by CI
replicas: 0x10
helmCharts:
- name: b
  version: 1.10
";
        fs::write(&path, content).unwrap();

        let file = KustomizationFile::new(path.clone());
        let kustomization = file.read().unwrap();
        assert_eq!(kustomization.as_str(), content);
        assert_eq!(
            kustomization.helm_charts()[0].version.as_deref(),
            Some("1.10")
        );

        file.write(&kustomization).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kustomization.yaml");

        let err = KustomizationFile::new(path).read().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<KustomizationError>(),
            Some(KustomizationError::FileReadError { .. })
        ));
    }

    #[test]
    fn test_read_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kustomization.yaml");
        fs::write(&path, "helmCharts: [[[broken").unwrap();

        let err = KustomizationFile::new(path).read().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<KustomizationError>(),
            Some(KustomizationError::ParseError { .. })
        ));
    }

    #[test]
    fn test_read_top_level_sequence() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kustomization.yaml");
        fs::write(&path, "- one\n- two\n").unwrap();

        let err = KustomizationFile::new(path).read().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<KustomizationError>(),
            Some(KustomizationError::NotAMapping { .. })
        ));
        assert!(err.to_string().contains("found a sequence"));
    }

    #[test]
    fn test_write_replaces_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kustomization.yaml");
        fs::write(&path, CONTENT).unwrap();

        let file = KustomizationFile::new(path.clone());
        let updated = Kustomization::parse("namespace: prod\n").unwrap();
        file.write(&updated).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "namespace: prod\n");
        let leftovers = fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kustomization.yaml");
        fs::write(&path, CONTENT).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let file = KustomizationFile::new(path.clone());
        let kustomization = file.read().unwrap();
        file.write(&kustomization).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[test]
    fn test_write_missing_directory() {
        let file = KustomizationFile::new(PathBuf::from("/nonexistent/dir/kustomization.yaml"));
        let err = file.write(&Kustomization::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<KustomizationError>(),
            Some(KustomizationError::FileWriteError { .. })
        ));
    }
}
