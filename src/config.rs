//! Board configuration loaded from TOML

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::{
    domain::{FormRules, ProjectStatus},
    error::{Result, TaskdeckError},
};

/// Headings shown above the two project lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListsConfig {
    pub active_heading: String,
    pub finished_heading: String,
}

impl Default for ListsConfig {
    fn default() -> Self {
        Self {
            active_heading: "ACTIVE PROJECTS".to_string(),
            finished_heading: "FINISHED PROJECTS".to_string(),
        }
    }
}

impl ListsConfig {
    pub fn heading_for(&self, status: ProjectStatus) -> &str {
        match status {
            ProjectStatus::Active => &self.active_heading,
            ProjectStatus::Finished => &self.finished_heading,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskdeckConfig {
    pub form: FormRules,
    pub lists: ListsConfig,
}

impl TaskdeckConfig {
    pub const FILE_NAME: &'static str = "taskdeck.toml";

    /// Parses configuration; absent sections keep their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| TaskdeckError::ConfigError(e.to_string()))
    }

    /// Reads and parses a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TaskdeckConfig::from_toml_str("").unwrap();
        assert_eq!(config, TaskdeckConfig::default());
        assert_eq!(config.form.description.min_length, Some(5));
        assert_eq!(config.form.people.min, Some(1.0));
        assert!(config.form.title.required);
    }

    #[test]
    fn test_partial_override() {
        let config = TaskdeckConfig::from_toml_str(
            r#"
            [form.people]
            required = true
            min = 1
            max = 10

            [lists]
            finished_heading = "DONE"
            "#,
        )
        .unwrap();

        assert_eq!(config.form.people.max, Some(10.0));
        assert_eq!(config.form.description.min_length, Some(5));
        assert_eq!(config.lists.heading_for(ProjectStatus::Active), "ACTIVE PROJECTS");
        assert_eq!(config.lists.heading_for(ProjectStatus::Finished), "DONE");
    }

    #[test]
    fn test_malformed_config_is_rejected() {
        let err = TaskdeckConfig::from_toml_str("[form.people\nmin = ").unwrap_err();
        assert!(matches!(err, TaskdeckError::ConfigError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[form.title]\nrequired = true\nmax_length = 40").unwrap();

        let config = TaskdeckConfig::load(file.path()).unwrap();
        assert_eq!(config.form.title.max_length, Some(40));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = TaskdeckConfig::load(dir.path().join(TaskdeckConfig::FILE_NAME)).unwrap_err();
        assert!(matches!(err, TaskdeckError::IoError(_)));
    }
}
