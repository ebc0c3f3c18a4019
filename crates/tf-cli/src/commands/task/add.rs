use tf_core::entities::NewTask;
use tf_core::enums::Priority;

use crate::cli::GlobalFlags;
use crate::commands::shared::identity::require_identity;
use crate::commands::shared::parse::{parse_deadline, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub title: String,
    pub description: Option<String>,
    pub deadline: String,
    pub priority: Option<String>,
    pub assignee: Option<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let identity = require_identity(ctx)?;
    let deadline = parse_deadline(&params.deadline)?;
    let assignee = params
        .assignee
        .unwrap_or_else(|| identity.user_id.clone());

    if assignee != identity.user_id && ctx.roster.get(&assignee).is_none() {
        tracing::warn!(%assignee, "assigning to a user not on the roster");
    }

    let mut fields = NewTask::new(params.title, deadline, assignee)
        .assigned_by(identity.user_id.clone(), identity.name.clone());
    if let Some(description) = params.description {
        fields = fields.description(description);
    }
    if let Some(priority) = params.priority.as_deref() {
        fields = fields.priority(parse_enum::<Priority>(priority, "priority")?);
    }

    let task = ctx.service.add_task(fields).await?;
    output(&task, flags.format)
}
