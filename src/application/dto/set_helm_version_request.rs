/// SetHelmVersionRequest - Input of the set-helm-version use case
#[derive(Debug, Clone)]
pub struct SetHelmVersionRequest {
    /// Raw `chartName=version` arguments, validated by the use case
    pub chart_versions: Vec<String>,
    /// Whether to warn about requested charts missing from the document
    pub warn_unmatched: bool,
}

impl SetHelmVersionRequest {
    pub fn new(chart_versions: Vec<String>) -> Self {
        Self {
            chart_versions,
            warn_unmatched: true,
        }
    }

    pub fn with_warn_unmatched(mut self, warn_unmatched: bool) -> Self {
        self.warn_unmatched = warn_unmatched;
        self
    }
}
