/// One `helmCharts` entry matched by a requested chart name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartUpdate {
    pub name: String,
    /// Version before the edit; `None` if the entry had no `version` key
    pub previous_version: Option<String>,
    pub version: String,
}

impl ChartUpdate {
    /// Whether the entry already had the requested version
    pub fn is_unchanged(&self) -> bool {
        self.previous_version.as_deref() == Some(self.version.as_str())
    }
}

/// Result of applying requested versions to a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// Matched entries in document order, including ones already at the version
    pub updated: Vec<ChartUpdate>,
    /// Requested chart names with no matching entry, sorted
    pub unmatched: Vec<String>,
}

impl UpdateOutcome {
    /// Whether any matched entry got a different version
    pub fn has_changes(&self) -> bool {
        self.updated.iter().any(|update| !update.is_unchanged())
    }
}
