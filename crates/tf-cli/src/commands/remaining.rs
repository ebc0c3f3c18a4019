use tf_core::responses::RemainingResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RemainingArgs;
use crate::commands::shared::parse::parse_deadline;
use crate::context::AppContext;
use crate::output::output;

/// Handle `taskflow remaining`.
pub fn handle(args: &RemainingArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let deadline = parse_deadline(&args.deadline)?;
    let detail = ctx.service.time_remaining(deadline);
    output(
        &RemainingResponse {
            deadline,
            remaining: detail.to_string(),
            detail,
        },
        flags.format,
    )
}
