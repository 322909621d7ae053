//! List feed renderer
//!
//! Fetches one feed and projects its records into a list mount point.
//! Each render pass is independent: a failing feed gets an error note in
//! front of its own list and never touches another feed's list.

use std::sync::Arc;

use tokio::task::{JoinError, JoinHandle};

use crate::dom::{Document, NodeId, RenderTarget};
use crate::domain::entities::{FeedResponse, ProductRecord};
use crate::domain::ports::FeedFetcher;
use crate::error::{DomError, FeedError};

pub const DEFAULT_CURRENCY_SUFFIX: &str = "грн.";

/// How a render pass ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// `items` list items were appended to the target
    Rendered { items: usize },
    /// Nothing was appended; `note` is the inserted error note, if it could be placed
    Failed {
        error: FeedError,
        note: Option<NodeId>,
    },
}

impl RenderOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, RenderOutcome::Rendered { .. })
    }
}

/// Handle to a spawned render pass
///
/// Dropping the handle detaches the pass; it still runs to completion.
#[derive(Debug)]
pub struct RenderHandle {
    inner: JoinHandle<RenderOutcome>,
}

impl RenderHandle {
    /// Wait for the pass to finish
    pub async fn wait(self) -> Result<RenderOutcome, JoinError> {
        self.inner.await
    }
}

/// Renders remote product feeds as `<li>` lists
pub struct ListFeedRenderer<F: FeedFetcher> {
    fetcher: Arc<F>,
    currency_suffix: Arc<str>,
}

impl<F: FeedFetcher> Clone for ListFeedRenderer<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: self.fetcher.clone(),
            currency_suffix: self.currency_suffix.clone(),
        }
    }
}

impl<F: FeedFetcher + 'static> ListFeedRenderer<F> {
    pub fn new(fetcher: Arc<F>, currency_suffix: &str) -> Self {
        Self {
            fetcher,
            currency_suffix: Arc::from(currency_suffix),
        }
    }

    /// Start rendering `locator` into `target` on a new task
    pub fn render(&self, locator: &str, target: RenderTarget) -> RenderHandle {
        let renderer = self.clone();
        let locator = locator.to_string();
        let inner = tokio::spawn(async move { renderer.render_now(&locator, &target).await });
        RenderHandle { inner }
    }

    /// Render `locator` into `target` on the current task
    pub async fn render_now(&self, locator: &str, target: &RenderTarget) -> RenderOutcome {
        let result = match self.load(locator).await {
            Ok(feed) => self.append_items(&feed, target),
            Err(e) => Err(e),
        };

        match result {
            Ok(items) => {
                tracing::info!(locator, items, "Rendered feed");
                RenderOutcome::Rendered { items }
            }
            Err(error) => {
                tracing::warn!(locator, error = %error, "Feed failed to render");
                let note = insert_error_note(&error, target);
                RenderOutcome::Failed { error, note }
            }
        }
    }

    async fn load(&self, locator: &str) -> Result<FeedResponse, FeedError> {
        tracing::debug!(locator, "Fetching feed");
        let response = self.fetcher.fetch(locator).await?;

        if !response.is_success() {
            return Err(FeedError::HttpStatus {
                status: response.status,
                detail: FeedResponse::error_detail(&response.body),
            });
        }

        FeedResponse::from_json(&response.body)
    }

    /// Build every item first, then link them all under one lock
    fn append_items(&self, feed: &FeedResponse, target: &RenderTarget) -> Result<usize, FeedError> {
        target.document().with(|doc| {
            doc.ensure_element(target.node())?;

            let items = feed
                .value
                .iter()
                .map(|record| build_item(doc, record, &self.currency_suffix))
                .collect::<Result<Vec<_>, DomError>>()?;

            for &item in &items {
                doc.append_child(target.node(), item)?;
            }
            Ok(items.len())
        })
    }
}

/// `<li><strong>name</strong> group <strong>cost suffix</strong></li>`
fn build_item(
    doc: &mut Document,
    record: &ProductRecord,
    currency_suffix: &str,
) -> Result<NodeId, DomError> {
    let item = doc.create_element("li");

    let name = strong(doc, record.display_name())?;
    let group = doc.create_text(&format!(" {} ", record.display_group()));
    let price = strong(doc, &record.price_label(currency_suffix))?;

    doc.append_child(item, name)?;
    doc.append_child(item, group)?;
    doc.append_child(item, price)?;
    Ok(item)
}

fn strong(doc: &mut Document, text: &str) -> Result<NodeId, DomError> {
    let element = doc.create_element("strong");
    let text = doc.create_text(text);
    doc.append_child(element, text)?;
    Ok(element)
}

/// `<p>Error: message</p>` as the target's previous sibling
fn insert_error_note(error: &FeedError, target: &RenderTarget) -> Option<NodeId> {
    let placed = target.document().with(|doc| {
        let note = doc.create_element("p");
        let text = doc.create_text(&format!("Error: {}", error));
        doc.append_child(note, text)?;
        doc.insert_before(note, target.node())?;
        Ok::<_, DomError>(note)
    });

    match placed {
        Ok(note) => Some(note),
        Err(e) => {
            tracing::error!(target_node = %target.node(), error = %e, "Could not place error note");
            None
        }
    }
}
