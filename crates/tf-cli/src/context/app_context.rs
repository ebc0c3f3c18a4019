use std::path::Path;

use tf_config::TaskflowConfig;
use tf_core::identity::SessionIdentity;
use tf_engine::TaskService;
use tf_store::{EmployeeRoster, JsonlFile};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: TaskService,
    pub roster: EmployeeRoster,
    pub config: TaskflowConfig,
    pub identity: Option<SessionIdentity>,
}

impl AppContext {
    /// Open the task store and roster under the project root.
    pub fn init(project_root: &Path, config: TaskflowConfig) -> anyhow::Result<Self> {
        let service = TaskService::open(&config, project_root);
        let roster = EmployeeRoster::load(Box::new(JsonlFile::new(
            config.storage.users_path(project_root),
        )));

        let identity = config.session.identity();
        match &identity {
            Some(identity) => {
                tracing::debug!(user = %identity.user_id, role = %identity.role, "session identity");
            }
            None => tracing::debug!("no session identity configured"),
        }

        Ok(Self {
            service,
            roster,
            config,
            identity,
        })
    }
}
