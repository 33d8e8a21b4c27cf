//! `bs-cli live`: stdin-driven live search.

use anyhow::{Context, Result};
use blog_search_frontend::{HttpJsonClient, LiveSearchClient, LoadingIndicator};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::{oneshot, watch},
};

use super::print_container;

/// Feed stdin lines to the client as input events until EOF.
pub async fn run<H, L>(client: &LiveSearchClient<H, L>) -> Result<()>
where
    H: HttpJsonClient + 'static,
    L: LoadingIndicator + 'static,
{
    let (stop_tx, stop_rx) = oneshot::channel();
    let printer = tokio::spawn(print_changes(
        client.results().id().to_string(),
        client.results().subscribe(),
        stop_rx,
    ));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        tracing::debug!(input = %line, "input event");
        client.on_input(&line);
    }

    client.settled().await;
    // The printer may already be gone if stdout broke.
    let _ = stop_tx.send(());
    printer.await.context("results printer panicked")??;

    let toasts = client.toasts();
    if !toasts.is_empty() {
        print_container(toasts.container().id(), &toasts.container().inner_html())?;
    }
    Ok(())
}

async fn print_changes(
    id: String,
    mut results: watch::Receiver<String>,
    mut stop: oneshot::Receiver<()>,
) -> Result<()> {
    loop {
        tokio::select! {
            changed = results.changed() => {
                if changed.is_err() {
                    return Ok(());
                }
                let html = results.borrow_and_update().clone();
                print_container(&id, &html)?;
            }
            _ = &mut stop => {
                if results.has_changed().unwrap_or(false) {
                    let html = results.borrow_and_update().clone();
                    print_container(&id, &html)?;
                }
                return Ok(());
            }
        }
    }
}
