use anyhow::Context;
use dex_core::IntegrityLock;
use dex_lock::LockStore;
use serde::Serialize;

use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::subcommands::LockCommands;
use crate::output::output;

#[derive(Debug, Serialize)]
struct LockStatusResponse {
    path: String,
    quarantined: bool,
    lock: Option<IntegrityLock>,
}

#[derive(Debug, Serialize)]
struct LockClearResponse {
    path: String,
    cleared: bool,
}

/// Handle `dex lock`.
pub fn handle(action: &LockCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let locks = &ctx.session.locks;
    let path = locks.path().display().to_string();

    match action {
        LockCommands::Status => {
            let lock = locks.read();
            output(
                &LockStatusResponse {
                    path,
                    quarantined: lock.is_some(),
                    lock,
                },
                flags.format,
            )
        }
        LockCommands::Clear => {
            locks
                .clear()
                .with_context(|| format!("failed to clear integrity lock at {path}"))?;
            output(
                &LockClearResponse {
                    path,
                    cleared: true,
                },
                flags.format,
            )
        }
    }
}
