pub mod chart_update;
pub mod chart_version_map;
mod document_index;
pub mod helm_chart;
pub mod kustomization;

pub use chart_update::{ChartUpdate, UpdateOutcome};
pub use chart_version_map::ChartVersionMap;
pub use helm_chart::HelmChart;
pub(crate) use document_index::{ChartEntry, ScalarNode, ScalarStyle};
pub(crate) use kustomization::TextEdit;
pub use kustomization::{Kustomization, HELM_CHARTS_KEY};
