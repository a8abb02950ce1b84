use anyhow::Context;
use dex_views::Confirmation;
use serde::Serialize;

use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::NameArgs;
use crate::commands::shared::confirm::PromptConfirm;
use crate::commands::shared::navigation::open_detail;
use crate::output::{notice, output};

#[derive(Debug, Serialize)]
struct DeleteResponse {
    name: String,
    deleted: bool,
    route: Option<String>,
}

/// Handle `dex delete`.
pub async fn handle(args: &NameArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut view = open_detail(&ctx.session, &args.name, flags).await?;

    let result = view
        .delete(&PromptConfirm::new(flags.yes))
        .await
        .with_context(|| format!("failed to delete {}", args.name))?;

    let response = match result {
        Confirmation::Declined => {
            notice("Delete cancelled.", flags.quiet);
            DeleteResponse {
                name: args.name.clone(),
                deleted: false,
                route: None,
            }
        }
        Confirmation::Completed(route) => DeleteResponse {
            name: args.name.clone(),
            deleted: true,
            route: Some(route.to_string()),
        },
    };
    output(&response, flags.format)
}
