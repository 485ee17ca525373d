use crate::shared::error::ChartArgumentError;
use std::collections::HashMap;

/// Requested chart versions, keyed by chart name
///
/// Built from `chartName=version` command-line arguments. When the same chart
/// name is given more than once, the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartVersionMap {
    versions: HashMap<String, String>,
}

impl ChartVersionMap {
    /// Parses `chartName=version` arguments
    ///
    /// Each argument is split on its first `=`, so the version itself may
    /// contain further `=` characters.
    ///
    /// # Errors
    /// - `NoChartVersions` if `args` is empty
    /// - `MalformedArgument` if an argument has no `=`
    /// - `EmptyField` if the chart name or the version is empty
    pub fn parse<I, S>(args: I) -> Result<Self, ChartArgumentError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut versions = HashMap::new();

        for arg in args {
            let arg = arg.as_ref();
            let (name, version) = arg.split_once('=').ok_or_else(|| {
                ChartArgumentError::MalformedArgument {
                    argument: arg.to_string(),
                }
            })?;

            if name.is_empty() || version.is_empty() {
                return Err(ChartArgumentError::EmptyField {
                    argument: arg.to_string(),
                });
            }

            versions.insert(name.to_string(), version.to_string());
        }

        if versions.is_empty() {
            return Err(ChartArgumentError::NoChartVersions);
        }

        Ok(Self { versions })
    }

    /// Version requested for `chart_name`, if any
    pub fn get(&self, chart_name: &str) -> Option<&str> {
        self.versions.get(chart_name).map(String::as_str)
    }

    /// Requested chart names in sorted order
    pub fn chart_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.versions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
