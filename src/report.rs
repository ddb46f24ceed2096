use std::io::Write;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{GradeError, Result};

/// Selector -> presence, in the order the selectors were checked.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Report {
    entries: Map<String, Value>,
}

impl Report {
    /// Record a result. A repeated selector keeps its first position.
    pub fn insert(&mut self, selector: &str, present: bool) {
        self.entries.insert(selector.to_string(), Value::Bool(present));
    }

    pub fn get(&self, selector: &str) -> Option<bool> {
        self.entries.get(selector).and_then(Value::as_bool)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), matches!(v, Value::Bool(true))))
    }
}

impl TryFrom<Map<String, Value>> for Report {
    type Error = String;

    fn try_from(entries: Map<String, Value>) -> std::result::Result<Self, Self::Error> {
        if let Some((k, v)) = entries.iter().find(|(_, v)| !v.is_boolean()) {
            return Err(format!("result for {k:?} is not a boolean: {v}"));
        }
        Ok(Self { entries })
    }
}

impl From<Report> for Map<String, Value> {
    fn from(report: Report) -> Self {
        report.entries
    }
}

/// Pretty-print a report as JSON with four-space indentation.
pub fn render(report: &Report) -> Result<String> {
    let mut buf = Vec::new();
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
    report
        .serialize(&mut ser)
        .map_err(|e| GradeError::Output(e.into()))?;
    String::from_utf8(buf).map_err(|e| {
        GradeError::Output(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

/// Write the rendered report and a trailing newline.
pub fn write_report<W: Write>(mut out: W, report: &Report) -> Result<()> {
    let text = render(report)?;
    writeln!(out, "{text}").map_err(GradeError::Output)?;
    out.flush().map_err(GradeError::Output)
}
