//! Where task and user records live on disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_data_dir() -> String {
    ".taskflow".to_string()
}

fn default_tasks_file() -> String {
    "tasks.jsonl".to_string()
}

fn default_users_file() -> String {
    "users.jsonl".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Data directory. Relative paths resolve against the project root.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Task records file name inside `data_dir`.
    #[serde(default = "default_tasks_file")]
    pub tasks_file: String,

    /// Roster records file name inside `data_dir`.
    #[serde(default = "default_users_file")]
    pub users_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            tasks_file: default_tasks_file(),
            users_file: default_users_file(),
        }
    }
}

impl StorageConfig {
    /// Resolve the data directory against `root`.
    #[must_use]
    pub fn data_dir_in(&self, root: &Path) -> PathBuf {
        let dir = PathBuf::from(&self.data_dir);
        if dir.is_absolute() { dir } else { root.join(dir) }
    }

    #[must_use]
    pub fn tasks_path(&self, root: &Path) -> PathBuf {
        self.data_dir_in(root).join(&self.tasks_file)
    }

    #[must_use]
    pub fn users_path(&self, root: &Path) -> PathBuf {
        self.data_dir_in(root).join(&self.users_file)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("storage.data_dir", &self.data_dir),
            ("storage.tasks_file", &self.tasks_file),
            ("storage.users_file", &self.users_file),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
