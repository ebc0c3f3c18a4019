use tf_core::enums::TaskStatus;
use tf_engine::TaskFilter;

use crate::cli::GlobalFlags;
use crate::commands::shared::identity::{require_admin, require_identity};
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub status: Option<String>,
    pub search: Option<String>,
    pub user: Option<String>,
    pub all: bool,
    pub limit: Option<u32>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(params.limit, flags.limit, ctx.config.general.default_limit);

    let mut filter = TaskFilter::new();
    if let Some(status) = params.status.as_deref() {
        filter = filter.status(parse_enum::<TaskStatus>(status, "status")?);
    }
    if let Some(search) = params.search {
        filter = filter.search(search);
    }

    let user = if params.all {
        require_admin(ctx, "listing every task")?;
        None
    } else {
        match params.user {
            Some(user) => Some(user),
            None => Some(require_identity(ctx)?.user_id.clone()),
        }
    };

    let mut tasks = ctx.service.filter_tasks(user.as_deref(), &filter).await;
    tasks.truncate(limit);
    output(&tasks, flags.format)
}
