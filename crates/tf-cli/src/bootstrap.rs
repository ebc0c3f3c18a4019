use std::path::Path;

use anyhow::Context;
use tf_config::TaskflowConfig;

/// Load `.env` (project first, then the usual lookup) and the layered config.
pub fn load_config(project_root: &Path) -> anyhow::Result<TaskflowConfig> {
    load_project_dotenv(project_root)?;
    TaskflowConfig::load_from(project_root).map_err(anyhow::Error::from)
}

fn load_project_dotenv(project_root: &Path) -> anyhow::Result<()> {
    let env_path = project_root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        return Ok(());
    }

    dotenvy::dotenv().ok();
    Ok(())
}
