use crate::application::dto::{SetHelmVersionRequest, SetHelmVersionResponse};
use crate::kustomization::domain::ChartVersionMap;
use crate::kustomization::services::HelmVersionUpdater;
use crate::ports::outbound::{KustomizationStore, ProgressReporter};
use crate::shared::Result;
use anyhow::Context;

/// SetHelmVersionUseCase - Sets Helm chart versions in a kustomization document
///
/// Validates the `chartName=version` arguments, then performs a whole-document
/// read-modify-write through the store. The document is only written when a
/// version actually changes. Store errors are returned as the store produced
/// them.
///
/// # Type Parameters
/// * `S` - KustomizationStore implementation
/// * `PR` - ProgressReporter implementation
pub struct SetHelmVersionUseCase<S, PR> {
    store: S,
    progress_reporter: PR,
}

impl<S, PR> SetHelmVersionUseCase<S, PR>
where
    S: KustomizationStore,
    PR: ProgressReporter,
{
    /// Creates a new SetHelmVersionUseCase with injected dependencies
    pub fn new(store: S, progress_reporter: PR) -> Self {
        Self {
            store,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// The arguments are validated before the store is touched, so an invalid
    /// invocation never reads or writes the document.
    pub fn execute(&self, request: SetHelmVersionRequest) -> Result<SetHelmVersionResponse> {
        let versions = ChartVersionMap::parse(&request.chart_versions)?;

        let location = self.store.location();
        self.progress_reporter
            .report(&format!("📖 Loading kustomization file: {}", location));

        let mut kustomization = self.store.read()?;
        let outcome = HelmVersionUpdater::apply(&versions, &mut kustomization)
            .with_context(|| format!("Failed to update {}", location))?;

        for update in &outcome.updated {
            if update.is_unchanged() {
                self.progress_reporter.report(&format!(
                    "   {}: already at {}",
                    update.name, update.version
                ));
                continue;
            }
            let previous = update.previous_version.as_deref().unwrap_or("<none>");
            self.progress_reporter.report(&format!(
                "   {}: {} -> {}",
                update.name, previous, update.version
            ));
        }

        if request.warn_unmatched {
            for name in &outcome.unmatched {
                self.progress_reporter.report_warning(&format!(
                    "Helm chart '{}' not found in kustomization file",
                    name
                ));
            }
        }

        let response = SetHelmVersionResponse::new(location, outcome);
        if !response.outcome.has_changes() {
            self.progress_reporter.report_completion(&format!(
                "✅ Nothing to change in {}",
                response.location
            ));
            return Ok(response);
        }

        self.store.write(&kustomization)?;

        let count = response.updated_count();
        self.progress_reporter.report_completion(&format!(
            "✅ Updated {} helm chart entr{} in {}",
            count,
            if count == 1 { "y" } else { "ies" },
            response.location
        ));

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kustomization::domain::Kustomization;
    use crate::shared::error::ChartArgumentError;
    use std::cell::{Cell, RefCell};

    struct InMemoryStore {
        content: Kustomization,
        written: RefCell<Option<Kustomization>>,
        reads: Cell<usize>,
    }

    impl InMemoryStore {
        fn new(yaml: &str) -> Self {
            Self {
                content: Kustomization::parse(yaml).unwrap(),
                written: RefCell::new(None),
                reads: Cell::new(0),
            }
        }
    }

    impl KustomizationStore for &InMemoryStore {
        fn location(&self) -> String {
            "memory".to_string()
        }

        fn read(&self) -> Result<Kustomization> {
            self.reads.set(self.reads.get() + 1);
            Ok(self.content.clone())
        }

        fn write(&self, kustomization: &Kustomization) -> Result<()> {
            *self.written.borrow_mut() = Some(kustomization.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        warnings: RefCell<Vec<String>>,
    }

    impl ProgressReporter for &RecordingReporter {
        fn report(&self, _message: &str) {}

        fn report_warning(&self, message: &str) {
            self.warnings.borrow_mut().push(message.to_string());
        }

        fn report_completion(&self, _message: &str) {}
    }

    #[test]
    fn test_invalid_arguments_do_not_touch_store() {
        let store = InMemoryStore::new("helmCharts: []\n");
        let reporter = RecordingReporter::default();
        let use_case = SetHelmVersionUseCase::new(&store, &reporter);

        let err = use_case
            .execute(SetHelmVersionRequest::new(vec!["broken".to_string()]))
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ChartArgumentError>(),
            Some(ChartArgumentError::MalformedArgument { .. })
        ));
        assert_eq!(store.reads.get(), 0);
        assert!(store.written.borrow().is_none());
    }

    #[test]
    fn test_updates_and_writes_document() {
        let store = InMemoryStore::new("helmCharts:\n- name: redis\n  version: old\n");
        let reporter = RecordingReporter::default();
        let use_case = SetHelmVersionUseCase::new(&store, &reporter);

        let response = use_case
            .execute(SetHelmVersionRequest::new(vec!["redis=2.0.0".to_string()]))
            .unwrap();

        assert_eq!(response.location, "memory");
        assert_eq!(response.updated_count(), 1);
        let written = store.written.borrow().clone().unwrap();
        assert_eq!(
            written.helm_charts()[0].version.as_deref(),
            Some("2.0.0")
        );
    }

    #[test]
    fn test_unmatched_warning_can_be_disabled() {
        let store = InMemoryStore::new("helmCharts:\n- name: redis\n  version: old\n");
        let reporter = RecordingReporter::default();
        let use_case = SetHelmVersionUseCase::new(&store, &reporter);

        use_case
            .execute(SetHelmVersionRequest::new(vec!["ghost=1.0.0".to_string()]))
            .unwrap();
        assert_eq!(reporter.warnings.borrow().len(), 1);
        assert!(reporter.warnings.borrow()[0].contains("'ghost'"));

        use_case
            .execute(
                SetHelmVersionRequest::new(vec!["ghost=1.0.0".to_string()])
                    .with_warn_unmatched(false),
            )
            .unwrap();
        assert_eq!(reporter.warnings.borrow().len(), 1);
    }

    #[test]
    fn test_nothing_written_when_versions_already_match() {
        let store = InMemoryStore::new("helmCharts:\n- name: redis\n  version: 1.10\n");
        let reporter = RecordingReporter::default();
        let use_case = SetHelmVersionUseCase::new(&store, &reporter);

        let response = use_case
            .execute(SetHelmVersionRequest::new(vec!["redis=1.10".to_string()]))
            .unwrap();

        assert_eq!(response.updated_count(), 0);
        assert!(response.outcome.updated[0].is_unchanged());
        assert!(store.written.borrow().is_none());
    }

    #[test]
    fn test_unsupported_entry_names_location() {
        let store = InMemoryStore::new("helmCharts:\n- name: redis\n  version: |\n    1.0\n");
        let reporter = RecordingReporter::default();
        let use_case = SetHelmVersionUseCase::new(&store, &reporter);

        let err = use_case
            .execute(SetHelmVersionRequest::new(vec!["redis=2.0".to_string()]))
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to update memory");
        assert!(err.root_cause().to_string().contains("helm chart 'redis'"));
        assert!(store.written.borrow().is_none());
    }
}
