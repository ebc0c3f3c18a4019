use tf_core::entities::UserProfile;

use crate::cli::GlobalFlags;
use crate::commands::shared::identity::require_admin;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    term: &str,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_admin(ctx, "searching employees")?;
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);

    let profiles: Vec<UserProfile> = ctx
        .roster
        .search(term)
        .into_iter()
        .take(limit)
        .map(tf_core::entities::User::profile)
        .collect();
    output(&profiles, flags.format)
}
