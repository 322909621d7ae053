//! Pricelist page
//!
//! Renders the materials and products feeds of the catalogue backend into
//! one HTML page and prints it to stdout. Both feeds are fetched
//! concurrently; a failing feed shows an error line above its own list.

mod layout;

use std::sync::Arc;

use anyhow::{Context, Result};
use pricelist::{Config, HttpFeedFetcher, ListFeedRenderer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr (stdout carries the page)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    tracing::info!(page_url = %config.page_url, "Rendering price lists");

    let fetcher = HttpFeedFetcher::new(&config.page_url).context("Failed to create feed fetcher")?;
    let renderer = ListFeedRenderer::new(Arc::new(fetcher), &config.currency_suffix);

    let page = layout::build_page().context("Failed to build page layout")?;
    let left = page
        .target_by_id(layout::LEFT_LIST_ID)
        .context("Page has no left list")?;
    let right = page
        .target_by_id(layout::RIGHT_LIST_ID)
        .context("Page has no right list")?;

    let left = renderer.render(&config.left_feed, left);
    let right = renderer.render(&config.right_feed, right);
    let (left, right) = tokio::join!(left.wait(), right.wait());
    left.context("Left feed task failed")?;
    right.context("Right feed task failed")?;

    print!("{}", layout::to_html_page(&page));

    Ok(())
}
