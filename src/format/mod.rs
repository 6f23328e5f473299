pub mod console;
pub mod json;

pub use console::ConsoleFormatter;
pub use json::JsonFormatter;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::metrics::MetricRecord;
use crate::project::Project;

/// Context printed alongside the records of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
    pub from: String,
    pub to: String,
}

/// Renders decoded records. Implementations only present data; they never
/// change what was fetched.
pub trait Formatter {
    /// Write whatever precedes the records of one project.
    fn format_header(&self, meta: &RunMetadata, out: &mut dyn Write) -> Result<()>;

    /// Write a single record.
    fn format_record(&self, meta: &RunMetadata, record: &MetricRecord, out: &mut dyn Write) -> Result<()>;
}

/// Render a header and every record into a string.
///
/// Output is buffered so that a failure leaves nothing half-written.
pub fn render(formatter: &dyn Formatter, meta: &RunMetadata, records: &[MetricRecord]) -> Result<String> {
    let mut buf = Vec::new();
    formatter.format_header(meta, &mut buf)?;
    for record in records {
        formatter.format_record(meta, record, &mut buf)?;
    }
    String::from_utf8(buf).map_err(|e| Error::Format(e.to_string()))
}

/// Output format selectable from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
}

impl OutputFormat {
    /// Build the formatter for this format.
    pub fn formatter(&self, indent: &str, with_metadata: bool) -> Box<dyn Formatter + Send + Sync> {
        match self {
            OutputFormat::Console => Box::new(ConsoleFormatter::new(with_metadata)),
            OutputFormat::Json => Box::new(JsonFormatter::new(indent, with_metadata)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Console => f.write_str("console"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "console" => Ok(OutputFormat::Console),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Config(format!(
                "unknown format '{other}'. Use: console, json"
            ))),
        }
    }
}
