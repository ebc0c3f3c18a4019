use tf_core::entities::NewEmployee;

use crate::cli::GlobalFlags;
use crate::commands::shared::identity::require_identity;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub name: String,
    pub email: String,
    pub password: String,
    pub department: String,
    pub position: String,
}

pub fn run(params: Params, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let actor = require_identity(ctx)?.clone();
    let now = ctx.service.now();
    let user = ctx.roster.add_employee(
        &actor,
        NewEmployee {
            name: params.name,
            email: params.email,
            password: params.password,
            department: params.department,
            position: params.position,
        },
        now,
    )?;
    output(&user.profile(), flags.format)
}
