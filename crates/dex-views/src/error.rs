use dex_client::GatewayError;
use dex_core::CoreError;
use dex_lock::LockError;
use thiserror::Error;

/// Errors surfaced by a screen. Each one is shown as a dismissable notice;
/// the screen keeps its prior data.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error(transparent)]
    Lock(#[from] LockError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("no stats edit in progress")]
    EditNotActive,
}
