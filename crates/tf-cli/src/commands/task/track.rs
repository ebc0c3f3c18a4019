use anyhow::Context;
use tf_core::durations::{format_clock, format_hours_minutes};
use tf_core::errors::CoreError;
use tf_core::responses::TrackResponse;
use tf_engine::TimerStart;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::ui;

/// Start the timer, wait for Ctrl-C, then stop it and report the run.
pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match ctx.service.start_timer(id).await? {
        TimerStart::Started => {}
        TimerStart::AlreadyRunning => anyhow::bail!("timer for {id} is already running"),
        TimerStart::Rejected => anyhow::bail!("task {id} is completed; its timer cannot start"),
    }

    let every = ctx.service.tick_interval().as_secs();
    ui::status(&format!(
        "tracking {id}; time is saved every {every}s. Press Ctrl-C to stop."
    ));

    let waited = tokio::signal::ctrl_c()
        .await
        .context("failed to listen for Ctrl-C");

    let elapsed_secs = ctx.service.stop_timer(id).await?.unwrap_or(0);
    waited?;

    let task = ctx
        .service
        .get_task(id)
        .await
        .ok_or_else(|| CoreError::task_not_found(id))?;
    let response = TrackResponse {
        elapsed: format_clock(elapsed_secs),
        time_spent: format_hours_minutes(task.time_spent),
        elapsed_secs,
        task,
    };
    output(&response, flags.format)
}
