use crate::kustomization::domain::{
    ChartEntry, ChartUpdate, ChartVersionMap, Kustomization, ScalarNode, ScalarStyle, TextEdit,
    UpdateOutcome,
};
use crate::shared::error::DocumentError;
use std::collections::HashSet;

/// HelmVersionUpdater - Rewrites chart versions inside a kustomization document
///
/// Every `helmCharts` entry whose `name` is in the requested map gets its
/// `version` replaced. Entries sharing a name are all updated. Only the text of
/// a changed `version` value is rewritten; other keys, comments and unmatched
/// entries keep their exact text. A document without `helmCharts` is left as is.
pub struct HelmVersionUpdater;

impl HelmVersionUpdater {
    /// Applies `versions` to `kustomization` in place
    ///
    /// Requested names that match no entry are reported in
    /// [`UpdateOutcome::unmatched`]; they are not an error. Entries already at
    /// the requested version are reported but their text is not touched.
    ///
    /// # Errors
    /// Returns `UnsupportedEntry` when a matched entry's version cannot be
    /// edited in place (block scalar, non-scalar, multi-line value).
    pub fn apply(
        versions: &ChartVersionMap,
        kustomization: &mut Kustomization,
    ) -> Result<UpdateOutcome, DocumentError> {
        let mut updated = Vec::new();
        let mut edits = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        for entry in kustomization.chart_entries() {
            let Some(name) = entry.name.as_ref() else {
                continue;
            };
            let Some(version) = versions.get(&name.value) else {
                continue;
            };

            let update = ChartUpdate {
                name: name.value.clone(),
                previous_version: entry.version.as_ref().map(|node| node.value.clone()),
                version: version.to_string(),
            };
            if !update.is_unchanged() {
                edits.push(version_edit(kustomization.as_str(), entry, &name.value, version)?);
            }
            updated.push(update);
            seen.insert(name.value.as_str());
        }

        let unmatched = versions
            .chart_names()
            .into_iter()
            .filter(|name| !seen.contains(*name))
            .map(str::to_string)
            .collect();

        kustomization.apply_edits(edits)?;
        Ok(UpdateOutcome { updated, unmatched })
    }
}

fn unsupported(chart: &str, line: usize, reason: &'static str) -> DocumentError {
    DocumentError::UnsupportedEntry {
        chart: chart.to_string(),
        line,
        reason,
    }
}

/// Builds the edit that sets `version` on one entry
fn version_edit(
    source: &str,
    entry: &ChartEntry,
    chart: &str,
    version: &str,
) -> Result<TextEdit, DocumentError> {
    if entry.version_not_scalar {
        return Err(unsupported(chart, entry.line, "version is not a scalar"));
    }

    if let Some(current) = &entry.version {
        let end = current.end.ok_or_else(|| {
            unsupported(chart, current.line, "version is not a single-line scalar")
        })?;
        return Ok(TextEdit {
            start: current.start,
            end,
            replacement: render_scalar(version, current.style, entry.flow),
        });
    }

    // No version key yet: add one right after the name.
    let (name_key, name) = match (&entry.name_key, &entry.name) {
        (Some(key), Some(name)) => (key, name),
        _ => return Err(unsupported(chart, entry.line, "entry has no name")),
    };
    let name_end = name
        .end
        .ok_or_else(|| unsupported(chart, name.line, "name is not a single-line scalar"))?;
    let rendered = render_scalar(version, ScalarStyle::Plain, entry.flow);

    if entry.flow {
        return Ok(TextEdit {
            start: name_end,
            end: name_end,
            replacement: format!(", version: {}", rendered),
        });
    }

    let indent = " ".repeat(column(source, name_key));
    let (at, newline) = line_end(source, name_end);
    Ok(TextEdit {
        start: at,
        end: at,
        replacement: format!("{}{}version: {}", newline, indent, rendered),
    })
}

/// Byte column of a node within its line
fn column(source: &str, node: &ScalarNode) -> usize {
    let line_start = source[..node.start].rfind('\n').map_or(0, |i| i + 1);
    node.start - line_start
}

/// Position before the line break that ends the line containing `from`, and
/// the line break the file uses there
fn line_end(source: &str, from: usize) -> (usize, &'static str) {
    match source[from..].find('\n') {
        Some(offset) => {
            let at = from + offset;
            if source[..at].ends_with('\r') {
                (at - 1, "\r\n")
            } else {
                (at, "\n")
            }
        }
        None => (source.len(), "\n"),
    }
}

/// Renders `value` as a YAML string scalar, keeping the quoting style the old
/// value used where possible
fn render_scalar(value: &str, style: ScalarStyle, flow: bool) -> String {
    let single_line = !value.contains(['\n', '\r']);
    match style {
        ScalarStyle::SingleQuoted if single_line => format!("'{}'", value.replace('\'', "''")),
        ScalarStyle::DoubleQuoted => double_quoted(value),
        _ => match serde_yaml_ng::to_string(value) {
            Ok(rendered) => {
                let rendered = rendered.trim_end_matches('\n');
                let block = rendered.starts_with(['|', '>']) || rendered.contains('\n');
                let breaks_flow = flow && rendered.contains([',', '[', ']', '{', '}']);
                if block || breaks_flow {
                    double_quoted(value)
                } else {
                    rendered.to_string()
                }
            }
            Err(_) => double_quoted(value),
        },
    }
}

fn double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
