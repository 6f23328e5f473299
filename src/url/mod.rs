use url::Url;

use crate::error::{Error, Result};

/// Host of the public Cauldron instance.
pub const DEFAULT_HOST: &str = "cauldron.io";

/// Base URL of the public Cauldron instance.
pub const DEFAULT_BASE_URL: &str = "https://cauldron.io";

/// Where metrics requests are sent.
///
/// The default points at `https://cauldron.io`; a different base can be given
/// for self-hosted deployments or a local mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: Url,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            base: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
        }
    }
}

impl Endpoint {
    /// Create an endpoint from a base URL such as `http://127.0.0.1:8080`.
    /// A path on the base is kept as a prefix of the metrics path.
    pub fn new(base: &str) -> Result<Self> {
        let base = Url::parse(base)?;
        if base.cannot_be_a_base() {
            return Err(Error::UrlParse(format!("{base} cannot be used as a base URL")));
        }
        Ok(Self { base })
    }

    /// Build the metrics URL for a project, date range and tab.
    ///
    /// Produces `<base>/project/<id>/metrics?from=..&to=..&tab=..` followed by
    /// one `repo_url[]` pair per repository URL, in input order. Dates and the
    /// tab name are passed through as given.
    pub fn metrics_url(
        &self,
        project_id: u64,
        from: &str,
        to: &str,
        tab: &str,
        repo_urls: &[String],
    ) -> Url {
        let mut url = self.base.clone();
        let id = project_id.to_string();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["project", id.as_str(), "metrics"]);
        }
        url.set_query(None);
        url.set_fragment(None);
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("from", from);
            query.append_pair("to", to);
            query.append_pair("tab", tab);
            for repo_url in repo_urls {
                query.append_pair("repo_url[]", repo_url);
            }
        }
        url
    }
}

/// Build a metrics URL against the public Cauldron instance.
pub fn metrics_url(project_id: u64, from: &str, to: &str, tab: &str, repo_urls: &[String]) -> Url {
    Endpoint::default().metrics_url(project_id, from, to, tab, repo_urls)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_url_no_repo_urls() {
        let url = metrics_url(2296, "2024-04-01", "2024-04-16", "activity-overview", &[]);
        assert_eq!(
            url.as_str(),
            "https://cauldron.io/project/2296/metrics?from=2024-04-01&to=2024-04-16&tab=activity-overview"
        );
    }

    #[test]
    fn test_metrics_url_with_repo_url() {
        let repos = vec!["https://github.com/a/b".to_string()];
        let url = metrics_url(2296, "2024-04-01", "2024-04-16", "activity-overview", &repos);
        assert_eq!(
            url.as_str(),
            "https://cauldron.io/project/2296/metrics?from=2024-04-01&to=2024-04-16&tab=activity-overview&repo_url%5B%5D=https%3A%2F%2Fgithub.com%2Fa%2Fb"
        );
    }

    #[test]
    fn test_metrics_url_with_repo_urls_in_order() {
        let repos = vec![
            "https://github.com/testcontainers/testcontainers-go".to_string(),
            "https://github.com/testcontainers/testcontainers-go.git".to_string(),
        ];
        let url = metrics_url(2296, "2024-04-01", "2024-04-16", "activity-overview", &repos);
        assert_eq!(
            url.as_str(),
            "https://cauldron.io/project/2296/metrics?from=2024-04-01&to=2024-04-16&tab=activity-overview\
             &repo_url%5B%5D=https%3A%2F%2Fgithub.com%2Ftestcontainers%2Ftestcontainers-go\
             &repo_url%5B%5D=https%3A%2F%2Fgithub.com%2Ftestcontainers%2Ftestcontainers-go.git"
        );
    }

    #[test]
    fn test_metrics_url_passes_values_through() {
        let url = metrics_url(7, "not-a-date", "2024-13-45", "bogus", &[]);
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("from".to_string(), "not-a-date".to_string()),
                ("to".to_string(), "2024-13-45".to_string()),
                ("tab".to_string(), "bogus".to_string()),
            ]
        );
    }

    #[test]
    fn test_endpoint_custom_base() {
        let endpoint = Endpoint::new("http://127.0.0.1:8080").unwrap();
        let url = endpoint.metrics_url(1, "2024-01-01", "2024-02-01", "overview", &[]);
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8080/project/1/metrics?from=2024-01-01&to=2024-02-01&tab=overview"
        );
    }

    #[test]
    fn test_endpoint_base_path_is_kept() {
        for base in ["https://example.org/cauldron", "https://example.org/cauldron/"] {
            let endpoint = Endpoint::new(base).unwrap();
            let url = endpoint.metrics_url(1, "a", "b", "overview", &[]);
            assert_eq!(
                url.as_str(),
                "https://example.org/cauldron/project/1/metrics?from=a&to=b&tab=overview"
            );
        }
    }

    #[test]
    fn test_endpoint_invalid_base() {
        assert!(Endpoint::new("not a url").is_err());
        assert!(matches!(Endpoint::new("mailto:someone@example.org"), Err(Error::UrlParse(_))));
    }
}
