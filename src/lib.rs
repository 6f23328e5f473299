pub mod config;
pub mod date_util;
pub mod error;
pub mod fetch;
pub mod format;
pub mod metrics;
pub mod project;
pub mod transport;
pub mod url;

pub use config::Config;
pub use error::{Error, Result};
pub use fetch::{Fetcher, MetricsQuery};
pub use format::{ConsoleFormatter, Formatter, JsonFormatter, OutputFormat, RunMetadata};
pub use metrics::{Activity, Community, MetricRecord, Overview, Performance, Tab};
pub use project::Project;
pub use transport::HttpTransport;
pub use crate::url::{metrics_url, Endpoint};

/// Options shared by every project of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub from: String,
    pub to: String,
    /// Tab to fetch; `None` fetches every tab.
    pub tab: Option<String>,
}

/// Main entry point: fetches a project's metrics and renders them.
#[derive(Debug, Clone)]
pub struct Cauldron {
    fetcher: Fetcher,
}

impl Cauldron {
    pub fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }

    /// The query issued for `project`.
    pub fn query_for(project: &Project, options: &ReportOptions) -> MetricsQuery {
        MetricsQuery {
            project_id: project.id,
            from: options.from.clone(),
            to: options.to.clone(),
            tab: options.tab.clone(),
            repo_urls: project.repo_urls.clone(),
        }
    }

    /// Fetch and decode the records of one project, in tab order.
    pub async fn metrics(&self, project: &Project, options: &ReportOptions) -> Result<Vec<MetricRecord>> {
        let query = Self::query_for(project, options);
        self.fetcher.fetch(&query).await
    }

    /// Fetch one project and render it. Nothing is returned unless every tab
    /// was fetched and decoded.
    pub async fn report(
        &self,
        project: &Project,
        options: &ReportOptions,
        formatter: &dyn Formatter,
    ) -> Result<String> {
        let records = self.metrics(project, options).await?;
        let meta = RunMetadata {
            project: Some(project.clone()),
            from: options.from.clone(),
            to: options.to.clone(),
        };
        format::render(formatter, &meta, &records)
    }

    /// Report on several projects one after another, writing each report to
    /// `out` as soon as it is complete. Stops at the first project that fails;
    /// reports written before it stay written.
    pub async fn report_all(
        &self,
        projects: &[Project],
        options: &ReportOptions,
        formatter: &dyn Formatter,
        out: &mut dyn std::io::Write,
    ) -> Result<()> {
        for (i, project) in projects.iter().enumerate() {
            log::info!(
                "[{}/{}] Fetching metrics for project {}",
                i + 1,
                projects.len(),
                project.display_name()
            );
            let report = self.report(project, options, formatter).await?;
            writeln!(out, "{report}")?;
            out.flush()?;
        }
        Ok(())
    }
}
