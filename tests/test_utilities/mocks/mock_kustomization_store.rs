use kustedit::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock KustomizationStore holding the document in memory
///
/// Clones share state, so a test can keep a handle after moving one into the
/// use case.
#[derive(Clone, Default)]
pub struct MockKustomizationStore {
    document: Arc<Mutex<Kustomization>>,
    writes: Arc<Mutex<usize>>,
    fail_read: bool,
    fail_write: bool,
}

impl MockKustomizationStore {
    pub fn new(yaml: &str) -> Self {
        Self {
            document: Arc::new(Mutex::new(Kustomization::parse(yaml).unwrap())),
            ..Self::default()
        }
    }

    pub fn with_read_failure() -> Self {
        Self {
            fail_read: true,
            ..Self::default()
        }
    }

    pub fn with_write_failure(yaml: &str) -> Self {
        Self {
            fail_write: true,
            ..Self::new(yaml)
        }
    }

    pub fn document(&self) -> Kustomization {
        self.document.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl KustomizationStore for MockKustomizationStore {
    fn location(&self) -> String {
        "mock://kustomization.yaml".to_string()
    }

    fn read(&self) -> Result<Kustomization> {
        if self.fail_read {
            anyhow::bail!("Mock kustomization read failure");
        }
        Ok(self.document())
    }

    fn write(&self, kustomization: &Kustomization) -> Result<()> {
        if self.fail_write {
            anyhow::bail!("Mock kustomization write failure");
        }
        *self.document.lock().unwrap() = kustomization.clone();
        *self.writes.lock().unwrap() += 1;
        Ok(())
    }
}
