//! # tf-config
//!
//! Layered configuration loading for TaskFlow using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TASKFLOW_*` prefix, `__` as separator)
//! 2. Project-level `.taskflow/config.toml`
//! 3. User-level `~/.config/taskflow/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TASKFLOW_TIMER__TICK_INTERVAL_SECS` -> `timer.tick_interval_secs`,
//! `TASKFLOW_SESSION__ROLE` -> `session.role`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use tf_config::TaskflowConfig;
//!
//! let config = TaskflowConfig::load_from(std::path::Path::new(".")).expect("config");
//! println!("tick every {}s", config.timer.tick_interval_secs);
//! ```

mod error;
mod general;
mod session;
mod storage;
mod timer;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use session::SessionConfig;
pub use storage::StorageConfig;
pub use timer::TimerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-project directory holding config and data.
pub const PROJECT_DIR: &str = ".taskflow";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TaskflowConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl TaskflowConfig {
    /// Load configuration for the project rooted at `root`.
    ///
    /// Does NOT read `.env` files; the CLI loads the project `.env` before
    /// calling this.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load_from(root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_for(root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain for the project rooted at `root`.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment_for(root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = root.join(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("TASKFLOW_").split("__"))
    }

    /// Reject values the engine cannot run with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.storage.validate()?;
        self.timer.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("taskflow").join("config.toml"))
    }
}
