use crate::cli::GlobalFlags;
use crate::commands::shared::identity::require_identity;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let actor = require_identity(ctx)?.clone();
    let removed = ctx.roster.remove_employee(&actor, id)?;
    output(&removed.profile(), flags.format)
}
