pub mod tab;
pub mod types;

pub use tab::Tab;
pub use types::*;

use serde::Serialize;

use crate::error::{Error, Result};

/// A decoded response from one metrics tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricRecord {
    Overview(Overview),
    Activity(Activity),
    Community(Community),
    Performance(Performance),
}

impl MetricRecord {
    /// Decode a raw response body into the record shape for `tab`.
    ///
    /// Missing fields keep their zero value and unknown fields are ignored.
    pub fn decode(tab: Tab, body: &[u8]) -> Result<Self> {
        let decoded = match tab {
            Tab::Overview => serde_json::from_slice(body).map(MetricRecord::Overview),
            Tab::Activity => serde_json::from_slice(body).map(MetricRecord::Activity),
            Tab::Community => serde_json::from_slice(body).map(MetricRecord::Community),
            Tab::Performance => serde_json::from_slice(body).map(MetricRecord::Performance),
        };
        decoded.map_err(|source| Error::Decode { tab, source })
    }

    pub fn tab(&self) -> Tab {
        match self {
            MetricRecord::Overview(_) => Tab::Overview,
            MetricRecord::Activity(_) => Tab::Activity,
            MetricRecord::Community(_) => Tab::Community,
            MetricRecord::Performance(_) => Tab::Performance,
        }
    }

    pub fn headers(&self) -> [&'static str; 2] {
        HEADERS
    }

    pub fn rows(&self) -> Vec<Row> {
        match self {
            MetricRecord::Overview(o) => o.rows(),
            MetricRecord::Activity(a) => a.rows(),
            MetricRecord::Community(c) => c.rows(),
            MetricRecord::Performance(p) => p.rows(),
        }
    }
}
