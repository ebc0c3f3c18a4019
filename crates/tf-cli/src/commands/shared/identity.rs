use tf_core::identity::SessionIdentity;

use crate::context::AppContext;

/// Resolve the signed-in user.
pub fn require_identity(ctx: &AppContext) -> anyhow::Result<&SessionIdentity> {
    ctx.identity.as_ref().ok_or_else(|| {
        anyhow::anyhow!(
            "No session identity. Set [session] user_id in .taskflow/config.toml or TASKFLOW_SESSION__USER_ID."
        )
    })
}

/// Resolve the signed-in user and require the admin role.
pub fn require_admin<'a>(ctx: &'a AppContext, action: &str) -> anyhow::Result<&'a SessionIdentity> {
    let identity = require_identity(ctx)?;
    if !identity.is_admin() {
        anyhow::bail!("{action} requires the admin role (signed in as {})", identity.user_id);
    }
    Ok(identity)
}
