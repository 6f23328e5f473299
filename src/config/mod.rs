use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::project::Project;

/// File name looked up in the working directory and then the home directory.
pub const DEFAULT_CONFIG_FILE: &str = ".cauldron.yml";

/// Contents of the configuration file.
///
/// ```yaml
/// projects:
///   - id: 2296
///     name: testcontainers-go
///     repo_url:
///       - https://github.com/testcontainers/testcontainers-go
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Config {
    /// Parse a configuration document.
    pub fn parse(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents).map_err(|e| Error::Config(format!("invalid configuration: {e}")))
    }

    /// Read the configuration file at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::parse(&contents)
    }

    /// Load the configuration.
    ///
    /// An explicit path must exist. Otherwise `./.cauldron.yml` and then
    /// `~/.cauldron.yml` are tried, and an empty configuration is returned
    /// when neither exists.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let home = dirs::home_dir();
        Self::load_from(explicit, Path::new("."), home.as_deref())
    }

    /// Like [`Config::load`], with the working and home directories given.
    pub fn load_from(explicit: Option<&Path>, cwd: &Path, home: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_config_path(cwd, home) {
            Some(path) => {
                log::info!("Using configuration file {}", path.display());
                Self::from_file(path)
            }
            None => {
                log::debug!("No configuration file found");
                Ok(Self::default())
            }
        }
    }

    /// Pick the projects to report on.
    ///
    /// Configured projects replace `project_id`, and `repo_urls` only applies
    /// to the project given by id.
    pub fn resolve_projects(self, project_id: Option<u64>, repo_urls: Vec<String>) -> Result<Vec<Project>> {
        if !self.projects.is_empty() {
            if let Some(id) = project_id {
                log::info!("Ignoring project ID {id}, as the configuration file contains projects");
            }
            return Ok(self.projects);
        }
        match project_id {
            Some(id) => Ok(vec![Project::new(id).with_repo_urls(repo_urls)]),
            None => Err(Error::Config(format!(
                "no project to fetch. Pass --project-id or list projects in {DEFAULT_CONFIG_FILE}"
            ))),
        }
    }
}

fn default_config_path(cwd: &Path, home: Option<&Path>) -> Option<PathBuf> {
    let local = cwd.join(DEFAULT_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }
    home.map(|home| home.join(DEFAULT_CONFIG_FILE))
        .filter(|path| path.is_file())
}
