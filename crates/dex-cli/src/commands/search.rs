use std::time::Duration;

use anyhow::Context;
use dex_client::DexClient;
use dex_lock::FileLockStore;
use dex_views::catalog::Refresh;
use dex_views::debounce::Debouncer;
use dex_views::CatalogView;
use futures::StreamExt;
use futures::stream::FuturesUnordered;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::bootstrap::AppContext;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::output::{notice, output};
use crate::progress::with_spinner;

/// Handle `dex search`.
pub async fn handle(
    args: &SearchArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let view = CatalogView::new(&ctx.session);
    if args.interactive {
        return interactive(&view, ctx.session.settings.debounce, flags).await;
    }

    let query = args.query.as_deref().unwrap_or_default();
    with_spinner("Searching catalog", view.show_search(query))
        .await
        .with_context(|| format!("search for '{query}' failed"))?;
    output(&view.snapshot(), flags.format)
}

/// Treat each stdin line as the current content of a search box.
///
/// Lines are debounced by `window`. Each settled query starts a search
/// without waiting for earlier ones; results of superseded searches are
/// dropped.
async fn interactive(
    view: &CatalogView<'_, DexClient, FileLockStore>,
    window: Duration,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let (tx, rx) = mpsc::channel(64);
    let reader = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if tx.send(line).await.is_err() {
                break;
            }
        }
    });

    let mut debouncer = Debouncer::new(rx, window);
    let mut in_flight = FuturesUnordered::new();
    let mut input_open = true;

    loop {
        tokio::select! {
            query = debouncer.next(), if input_open => match query {
                Some(query) => in_flight.push(async move {
                    let result = view.show_search(&query).await;
                    (query, result)
                }),
                None => input_open = false,
            },
            Some((query, result)) = in_flight.next(), if !in_flight.is_empty() => match result {
                Ok(Refresh::Applied) => output(&view.snapshot(), flags.format)
                    .context("failed to render search results")?,
                Ok(Refresh::Stale) => tracing::debug!(query, "superseded search dropped"),
                Err(error) => notice(&format!("search for '{query}' failed: {error}"), flags.quiet),
            },
            else => break,
        }
    }

    reader.abort();
    Ok(())
}
