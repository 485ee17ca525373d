//! Locates `helmCharts` entries in kustomization text.
//!
//! The document is walked as a stream of marked parser events, so every
//! scalar keeps its source text and byte position. Nothing is converted to
//! numbers or booleans, and nothing outside the located spans is ever
//! rewritten.

use super::kustomization::HELM_CHARTS_KEY;
use crate::shared::error::DocumentError;
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::{Marker, TScalarStyle};

/// Quoting style of a scalar in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScalarStyle {
    Plain,
    SingleQuoted,
    DoubleQuoted,
    Block,
}

impl From<&TScalarStyle> for ScalarStyle {
    fn from(style: &TScalarStyle) -> Self {
        match style {
            TScalarStyle::SingleQuoted => ScalarStyle::SingleQuoted,
            TScalarStyle::DoubleQuoted => ScalarStyle::DoubleQuoted,
            TScalarStyle::Literal | TScalarStyle::Folded => ScalarStyle::Block,
            _ => ScalarStyle::Plain,
        }
    }
}

/// A scalar with its position in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScalarNode {
    pub value: String,
    pub style: ScalarStyle,
    /// Byte offset of the first character (the opening quote if quoted)
    pub start: usize,
    /// Byte offset just past the scalar; `None` when the source text cannot
    /// be matched to the value (multi-line, block style, anchors, empty)
    pub end: Option<usize>,
    pub line: usize,
}

/// One mapping in the `helmCharts` sequence
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct ChartEntry {
    pub name_key: Option<ScalarNode>,
    pub name: Option<ScalarNode>,
    pub version: Option<ScalarNode>,
    /// `version` key present but its value is not a scalar
    pub version_not_scalar: bool,
    pub repo: Option<String>,
    /// Written in flow style (`{name: a, version: b}`)
    pub flow: bool,
    pub line: usize,
}

/// Top-level shape of the document
pub(crate) struct DocumentIndex {
    pub charts: Vec<ChartEntry>,
}

struct EventCollector {
    events: Vec<(Event, Marker)>,
}

impl MarkedEventReceiver for EventCollector {
    fn on_event(&mut self, event: Event, mark: Marker) {
        self.events.push((event, mark));
    }
}

/// Parses `source` (first document only) and indexes its chart entries
pub(crate) fn index_document(source: &str) -> Result<DocumentIndex, DocumentError> {
    let mut collector = EventCollector { events: Vec::new() };
    Parser::new_from_str(source)
        .load(&mut collector, false)
        .map_err(|e| DocumentError::Syntax(e.to_string()))?;

    let mut walker = Walker::new(source, &collector.events);
    walker.document()
}

/// Cursor over the collected events
struct Walker<'a> {
    source: &'a str,
    /// Byte offset of each char index, plus one past the end
    offsets: Vec<usize>,
    events: &'a [(Event, Marker)],
    pos: usize,
}

impl<'a> Walker<'a> {
    fn new(source: &'a str, events: &'a [(Event, Marker)]) -> Self {
        let offsets = source
            .char_indices()
            .map(|(byte, _)| byte)
            .chain(std::iter::once(source.len()))
            .collect();
        Self {
            source,
            offsets,
            events,
            pos: 0,
        }
    }

    fn peek(&self) -> Option<&'a Event> {
        self.events.get(self.pos).map(|(event, _)| event)
    }

    fn next(&mut self) -> Option<&'a (Event, Marker)> {
        let item = self.events.get(self.pos);
        self.pos += 1;
        item
    }

    fn byte_offset(&self, mark: &Marker) -> usize {
        self.offsets
            .get(mark.index())
            .copied()
            .unwrap_or(self.source.len())
    }

    fn line_of(&self, byte: usize) -> usize {
        self.source[..byte].matches('\n').count() + 1
    }

    /// Consumes one complete node (scalar, alias or nested collection)
    fn skip_node(&mut self) {
        let mut depth = 0usize;
        while let Some((event, _)) = self.next() {
            match event {
                Event::MappingStart { .. } | Event::SequenceStart { .. } => depth += 1,
                Event::MappingEnd { .. } | Event::SequenceEnd { .. } => {
                    depth = depth.saturating_sub(1)
                }
                _ => {}
            }
            if depth == 0 {
                return;
            }
        }
    }

    fn document(&mut self) -> Result<DocumentIndex, DocumentError> {
        let mut index = DocumentIndex { charts: Vec::new() };

        loop {
            match self.next() {
                Some((Event::StreamStart { .. }, _)) | Some((Event::DocumentStart { .. }, _)) => {
                    continue
                }
                Some((Event::MappingStart { .. }, _)) => break,
                Some((Event::Scalar(value, TScalarStyle::Plain, ..), _)) if is_null(value) => {
                    return Ok(index)
                }
                Some((Event::Scalar(..), _)) => return Err(DocumentError::NotAMapping("a scalar")),
                Some((Event::SequenceStart { .. }, _)) => {
                    return Err(DocumentError::NotAMapping("a sequence"))
                }
                Some((Event::Alias { .. }, _)) => {
                    return Err(DocumentError::NotAMapping("an alias"))
                }
                _ => return Ok(index),
            }
        }

        loop {
            match self.peek() {
                None | Some(Event::MappingEnd { .. }) => break,
                Some(Event::Scalar(key, ..)) => {
                    let is_charts = key.as_str() == HELM_CHARTS_KEY;
                    self.pos += 1;
                    if is_charts {
                        self.chart_list(&mut index.charts);
                    } else {
                        self.skip_node();
                    }
                }
                Some(_) => {
                    self.skip_node();
                    self.skip_node();
                }
            }
        }

        Ok(index)
    }

    fn chart_list(&mut self, charts: &mut Vec<ChartEntry>) {
        if !matches!(self.peek(), Some(Event::SequenceStart { .. })) {
            self.skip_node();
            return;
        }
        self.pos += 1;

        loop {
            match self.peek() {
                None => return,
                Some(Event::SequenceEnd { .. }) => {
                    self.pos += 1;
                    return;
                }
                Some(Event::MappingStart { .. }) => charts.push(self.chart_entry()),
                Some(_) => self.skip_node(),
            }
        }
    }

    fn chart_entry(&mut self) -> ChartEntry {
        let mut entry = ChartEntry::default();
        if let Some((_, mark)) = self.next() {
            let start = self.byte_offset(mark);
            entry.flow = self.source[start..].trim_start().starts_with('{');
            entry.line = self.line_of(start);
        }

        loop {
            let key = match self.peek() {
                None => return entry,
                Some(Event::MappingEnd { .. }) => {
                    self.pos += 1;
                    return entry;
                }
                Some(Event::Scalar(..)) => self.scalar(),
                Some(_) => {
                    self.skip_node();
                    self.skip_node();
                    continue;
                }
            };

            let value = match self.peek() {
                Some(Event::Scalar(..)) => Some(self.scalar()),
                _ => {
                    self.skip_node();
                    None
                }
            };

            match key.value.as_str() {
                "name" => {
                    entry.name = value;
                    entry.name_key = Some(key);
                }
                "version" => {
                    entry.version_not_scalar = value.is_none();
                    entry.version = value;
                }
                "repo" => entry.repo = value.map(|node| node.value),
                _ => {}
            }
        }
    }

    /// Consumes a scalar event. Callers check the event kind first.
    fn scalar(&mut self) -> ScalarNode {
        let (value, style, start) = match self.next() {
            Some((Event::Scalar(value, style, ..), mark)) => {
                (value.clone(), ScalarStyle::from(style), self.byte_offset(mark))
            }
            _ => (String::new(), ScalarStyle::Block, self.source.len()),
        };
        ScalarNode {
            end: scalar_end(self.source, start, &value, style),
            line: self.line_of(start),
            value,
            style,
            start,
        }
    }
}

fn is_null(value: &str) -> bool {
    matches!(value, "" | "~" | "null" | "Null" | "NULL")
}

/// Finds where a scalar's source text ends, checking that the text at
/// `start` really spells `value`
fn scalar_end(source: &str, start: usize, value: &str, style: ScalarStyle) -> Option<usize> {
    let rest = source.get(start..)?;
    match style {
        ScalarStyle::Plain if !value.is_empty() => {
            rest.starts_with(value).then(|| start + value.len())
        }
        ScalarStyle::SingleQuoted if !value.contains('\n') => {
            let raw = format!("'{}'", value.replace('\'', "''"));
            rest.starts_with(&raw).then(|| start + raw.len())
        }
        ScalarStyle::DoubleQuoted if rest.starts_with('"') => {
            let mut escaped = false;
            for (i, c) in rest.char_indices().skip(1) {
                match c {
                    _ if escaped => escaped = false,
                    '\\' => escaped = true,
                    '"' => return Some(start + i + 1),
                    '\n' => return None,
                    _ => {}
                }
            }
            None
        }
        _ => None,
    }
}
