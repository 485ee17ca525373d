use super::document_index::ChartEntry;

/// Read-only view of one `helmCharts` entry
///
/// Only the fields kustedit cares about are extracted; the entry itself keeps
/// every other key untouched inside the document. Values are the scalar text
/// as written, so `version: 1.10` reads as `"1.10"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelmChart {
    pub name: String,
    pub version: Option<String>,
    pub repo: Option<String>,
}

impl HelmChart {
    /// Returns `None` when the entry has no scalar `name`
    pub(crate) fn from_entry(entry: &ChartEntry) -> Option<Self> {
        let name = entry.name.as_ref()?.value.clone();
        Some(Self {
            name,
            version: entry.version.as_ref().map(|node| node.value.clone()),
            repo: entry.repo.clone(),
        })
    }
}
