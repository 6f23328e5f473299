use std::io::Write;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

use crate::error::{Error, Result};
use crate::format::{Formatter, RunMetadata};
use crate::metrics::{MetricRecord, Tab};
use crate::project::Project;

const DEFAULT_INDENT: &str = "  ";

/// Record wrapped together with the run metadata.
#[derive(Serialize)]
struct Wrapped<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<&'a Project>,
    from: &'a str,
    to: &'a str,
    tab: Tab,
    response: &'a MetricRecord,
}

/// Pretty-printed JSON, one document per record.
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    indent: String,
    with_metadata: bool,
}

/// Two-space indent, with metadata, matching [`ConsoleFormatter::default`](crate::format::ConsoleFormatter).
impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT, true)
    }
}

impl JsonFormatter {
    /// An empty `indent` means two spaces.
    pub fn new(indent: &str, with_metadata: bool) -> Self {
        let indent = if indent.is_empty() { DEFAULT_INDENT } else { indent };
        Self {
            indent: indent.to_string(),
            with_metadata,
        }
    }

    fn write_pretty<T: Serialize>(&self, value: &T, out: &mut dyn Write) -> Result<()> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(self.indent.as_bytes()));
        value
            .serialize(&mut ser)
            .map_err(|e| Error::Format(format!("error marshalling JSON: {e}")))?;
        buf.push(b'\n');
        out.write_all(&buf)?;
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    /// Metadata travels inside each record, so there is no separate header.
    fn format_header(&self, _meta: &RunMetadata, _out: &mut dyn Write) -> Result<()> {
        Ok(())
    }

    fn format_record(&self, meta: &RunMetadata, record: &MetricRecord, out: &mut dyn Write) -> Result<()> {
        if self.with_metadata {
            let wrapped = Wrapped {
                project: meta.project.as_ref(),
                from: &meta.from,
                to: &meta.to,
                tab: record.tab(),
                response: record,
            };
            self.write_pretty(&wrapped, out)
        } else {
            self.write_pretty(record, out)
        }
    }
}
