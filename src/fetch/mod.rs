//! Concurrent fetching of metrics tabs.
//!
//! Every planned tab is fetched on its own task. Responses carry their plan
//! index back to the coordinator, so the decoded records always come out in
//! plan order no matter which request finishes first. The first failure wins:
//! the remaining tasks are aborted and nothing is decoded.

use bytes::Bytes;
use reqwest::StatusCode;
use tokio::task::JoinSet;
use url::Url;

use crate::error::{Error, Result};
use crate::metrics::{MetricRecord, Tab};
use crate::transport::HttpTransport;
use crate::url::Endpoint;

/// Everything needed to fetch one project's metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsQuery {
    pub project_id: u64,
    pub from: String,
    pub to: String,
    /// Tab name to fetch. `None` fetches every tab.
    pub tab: Option<String>,
    pub repo_urls: Vec<String>,
}

/// One request of a fetch plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedTab {
    pub index: usize,
    /// Name sent in the `tab` query parameter.
    pub name: String,
    /// Record shape the response is decoded into.
    pub kind: Tab,
    pub url: Url,
}

/// A successful response, still tied to the tab that requested it.
#[derive(Debug)]
pub struct TabResponse {
    pub tab: PlannedTab,
    pub body: Bytes,
}

/// Build the ordered list of requests for a query.
pub fn plan(endpoint: &Endpoint, query: &MetricsQuery) -> Vec<PlannedTab> {
    let names: Vec<String> = match query.tab.as_deref() {
        Some(name) if !name.is_empty() => vec![name.to_string()],
        _ => Tab::ALL.iter().map(|t| t.as_str().to_string()).collect(),
    };

    names
        .into_iter()
        .enumerate()
        .map(|(index, name)| {
            let url = endpoint.metrics_url(
                query.project_id,
                &query.from,
                &query.to,
                &name,
                &query.repo_urls,
            );
            PlannedTab {
                index,
                kind: Tab::for_name(&name),
                name,
                url,
            }
        })
        .collect()
}

/// Fetches and decodes metrics tabs concurrently.
#[derive(Debug, Clone)]
pub struct Fetcher {
    transport: HttpTransport,
    endpoint: Endpoint,
}

impl Fetcher {
    pub fn new(transport: HttpTransport, endpoint: Endpoint) -> Self {
        Self {
            transport,
            endpoint,
        }
    }

    /// Fetch every tab of the query and decode the responses.
    ///
    /// Records are returned in plan order. Any failed request, non-200 status
    /// or undecodable body fails the whole query.
    pub async fn fetch(&self, query: &MetricsQuery) -> Result<Vec<MetricRecord>> {
        let planned = plan(&self.endpoint, query);
        let responses = self.fetch_all(planned).await?;

        responses
            .into_iter()
            .map(|response| MetricRecord::decode(response.tab.kind, &response.body))
            .collect()
    }

    /// Run one task per planned tab and wait for all of them, or the first
    /// failure. Responses are returned in plan order.
    pub async fn fetch_all(&self, planned: Vec<PlannedTab>) -> Result<Vec<TabResponse>> {
        let mut slots: Vec<Option<TabResponse>> = planned.iter().map(|_| None).collect();
        let mut tasks = JoinSet::new();

        for tab in planned {
            let transport = self.transport.clone();
            tasks.spawn(fetch_tab(transport, tab));
        }

        // Returning early drops the JoinSet, which aborts the tasks still running.
        while let Some(joined) = tasks.join_next().await {
            let response = joined??;
            log::debug!("Fetched {} ({} bytes)", response.tab.name, response.body.len());
            let index = response.tab.index;
            slots[index] = Some(response);
        }

        slots
            .into_iter()
            .map(|slot| slot.ok_or_else(|| Error::Task("fetch task produced no response".into())))
            .collect()
    }
}

async fn fetch_tab(transport: HttpTransport, tab: PlannedTab) -> Result<TabResponse> {
    let response = transport.get(&tab.url).await?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(Error::Status {
            status: status.as_u16(),
            url: tab.url.to_string(),
        });
    }

    let body = response.bytes().await.map_err(|source| Error::Transport {
        url: tab.url.to_string(),
        source,
    })?;

    Ok(TabResponse { tab, body })
}
