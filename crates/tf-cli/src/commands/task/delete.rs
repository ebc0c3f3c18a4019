use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct DeleteResponse<'a> {
    id: &'a str,
    deleted: bool,
}

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.service.delete_task(id).await?;
    output(&DeleteResponse { id, deleted: true }, flags.format)
}
