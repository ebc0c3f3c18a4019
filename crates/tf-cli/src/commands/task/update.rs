use tf_core::enums::Priority;
use tf_store::updates::task::TaskUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_deadline, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<String>,
    pub priority: Option<String>,
    pub assignee: Option<String>,
    pub time_spent: Option<u64>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_update_params(&params)?;

    let mut builder = TaskUpdateBuilder::new();
    if let Some(title) = params.title.as_deref() {
        builder = builder.title(title);
    }
    if let Some(description) = params.description.as_deref() {
        builder = builder.description(description);
    }
    if let Some(deadline) = params.deadline.as_deref() {
        builder = builder.deadline(parse_deadline(deadline)?);
    }
    if let Some(priority) = params.priority.as_deref() {
        builder = builder.priority(parse_enum::<Priority>(priority, "priority")?);
    }
    if let Some(assignee) = params.assignee.as_deref() {
        builder = builder.assigned_to(assignee);
    }
    if let Some(time_spent) = params.time_spent {
        builder = builder.time_spent(time_spent);
    }

    let task = ctx.service.update_task(&params.id, &builder.build()).await?;
    output(&task, flags.format)
}

fn validate_update_params(params: &Params) -> anyhow::Result<()> {
    if params.title.is_none()
        && params.description.is_none()
        && params.deadline.is_none()
        && params.priority.is_none()
        && params.assignee.is_none()
        && params.time_spent.is_none()
    {
        anyhow::bail!(
            "At least one of --title, --description, --deadline, --priority, --assignee, or --time-spent must be provided"
        );
    }
    Ok(())
}
