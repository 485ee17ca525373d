use super::document_index::{index_document, ChartEntry};
use super::helm_chart::HelmChart;
use crate::shared::error::DocumentError;

/// Key of the Helm chart list inside a kustomization document
pub const HELM_CHARTS_KEY: &str = "helmCharts";

/// Kustomization document
///
/// Keeps the file's text as read and an index of its `helmCharts` entries.
/// Edits are applied to the text span of each changed value, so comments,
/// quoting, key order and every untouched scalar stay byte-for-byte the same.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Kustomization {
    source: String,
    charts: Vec<ChartEntry>,
}

/// Replacement of the byte range `start..end` of the document text
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TextEdit {
    pub start: usize,
    pub end: usize,
    pub replacement: String,
}

impl Kustomization {
    /// Parses a document from YAML text. Blank input yields an empty document.
    ///
    /// # Errors
    /// Returns an error if the text is not valid YAML or its top level is not a mapping.
    pub fn parse(content: &str) -> Result<Self, DocumentError> {
        let index = index_document(content)?;
        Ok(Self {
            source: content.to_string(),
            charts: index.charts,
        })
    }

    /// Document text, including any edits applied so far
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Chart references in document order. Entries without a scalar `name`
    /// are skipped.
    pub fn helm_charts(&self) -> Vec<HelmChart> {
        self.charts.iter().filter_map(HelmChart::from_entry).collect()
    }

    pub(crate) fn chart_entries(&self) -> &[ChartEntry] {
        &self.charts
    }

    /// Applies non-overlapping edits and re-indexes the result
    pub(crate) fn apply_edits(&mut self, mut edits: Vec<TextEdit>) -> Result<(), DocumentError> {
        if edits.is_empty() {
            return Ok(());
        }
        edits.sort_by(|a, b| b.start.cmp(&a.start));

        let mut source = self.source.clone();
        for edit in edits {
            source.replace_range(edit.start..edit.end, &edit.replacement);
        }

        let index = index_document(&source).map_err(|e| {
            DocumentError::Syntax(format!("edited document is no longer valid YAML: {}", e))
        })?;
        self.source = source;
        self.charts = index.charts;
        Ok(())
    }
}
