use crate::kustomization::domain::UpdateOutcome;

/// SetHelmVersionResponse - What the use case changed
#[derive(Debug, Clone)]
pub struct SetHelmVersionResponse {
    /// Location of the edited document, as reported by the store
    pub location: String,
    pub outcome: UpdateOutcome,
}

impl SetHelmVersionResponse {
    pub fn new(location: String, outcome: UpdateOutcome) -> Self {
        Self { location, outcome }
    }

    /// Number of entries whose version text was changed
    pub fn updated_count(&self) -> usize {
        self.outcome
            .updated
            .iter()
            .filter(|update| !update.is_unchanged())
            .count()
    }
}
