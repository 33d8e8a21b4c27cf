//! `bs-cli search`: one-shot search.

use anyhow::Result;
use blog_search_frontend::{HttpJsonClient, LiveSearchClient, LoadingIndicator};

use super::print_container;

pub async fn run<H, L>(client: &LiveSearchClient<H, L>, query: &str) -> Result<()>
where
    H: HttpJsonClient + 'static,
    L: LoadingIndicator + 'static,
{
    client.submit(query).await?;

    let results = client.results();
    if results.is_empty() {
        tracing::info!(query, "no results rendered");
    }
    print_container(results.id(), &results.inner_html())?;

    let toasts = client.toasts();
    if !toasts.is_empty() {
        print_container(toasts.container().id(), &toasts.container().inner_html())?;
    }
    Ok(())
}
