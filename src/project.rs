use serde::{Deserialize, Serialize};

/// A Cauldron project to report on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Repository URLs used to filter the project's metrics.
    #[serde(default, rename = "repo_url", alias = "repo_urls")]
    pub repo_urls: Vec<String>,
}

impl Project {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn with_repo_urls(mut self, repo_urls: Vec<String>) -> Self {
        self.repo_urls = repo_urls;
        self
    }

    /// Name for display, falling back to the numeric id.
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(Project::new(2296).display_name(), "2296");
        let named = Project {
            name: Some("testcontainers-go".to_string()),
            ..Project::new(2296)
        };
        assert_eq!(named.display_name(), "testcontainers-go");
    }

    #[test]
    fn test_serialize_uses_repo_url_key() {
        let p = Project::new(1).with_repo_urls(vec!["https://github.com/a/b".to_string()]);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "repo_url": ["https://github.com/a/b"]})
        );
    }
}
