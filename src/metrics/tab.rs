use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

/// One of the metrics views exposed by the Cauldron API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    Overview,
    #[serde(rename = "activity-overview")]
    Activity,
    #[serde(rename = "community-overview")]
    Community,
    #[serde(rename = "performance-overview")]
    Performance,
}

impl Tab {
    /// Order in which tabs are fetched and printed when no tab is selected.
    pub const ALL: [Tab; 4] = [Tab::Activity, Tab::Community, Tab::Overview, Tab::Performance];

    /// The tab name as used in the `tab` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Activity => "activity-overview",
            Tab::Community => "community-overview",
            Tab::Performance => "performance-overview",
        }
    }

    /// Map a tab name to the record shape used to decode its response.
    ///
    /// Unknown names fall back to [`Tab::Overview`].
    pub fn for_name(name: &str) -> Tab {
        match name.parse() {
            Ok(tab) => tab,
            Err(_) => {
                log::warn!("Unknown tab '{name}', decoding the response as overview");
                Tab::Overview
            }
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "overview" => Ok(Tab::Overview),
            "activity-overview" => Ok(Tab::Activity),
            "community-overview" => Ok(Tab::Community),
            "performance-overview" => Ok(Tab::Performance),
            other => Err(Error::Config(format!(
                "unknown tab '{other}'. Use: overview, activity-overview, community-overview, performance-overview"
            ))),
        }
    }
}
