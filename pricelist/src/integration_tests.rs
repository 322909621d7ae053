//! End-to-end tests: real HTTP adapter against a local backend
//!
//! Run with: cargo test integration_tests

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::adapters::HttpFeedFetcher;
    use crate::app::{ListFeedRenderer, RenderOutcome};
    use crate::error::FeedError;
    use crate::test_utils::{spawn_backend, test_page, unused_local_url};

    fn renderer_for(page_url: &str) -> ListFeedRenderer<HttpFeedFetcher> {
        let fetcher = HttpFeedFetcher::new(page_url).unwrap();
        ListFeedRenderer::new(Arc::new(fetcher), "грн.")
    }

    #[tokio::test]
    async fn both_feeds_render_into_their_lists() {
        let base = spawn_backend().await;
        let renderer = renderer_for(&format!("{}/static/index.html", base));
        let page = test_page();

        let left = renderer.render("../w_matherial_get_all", page.left.clone());
        let right = renderer.render("../w_product_get_all", page.right.clone());
        let (left, right) = tokio::join!(left.wait(), right.wait());

        assert_eq!(left.unwrap(), RenderOutcome::Rendered { items: 1 });
        assert_eq!(right.unwrap(), RenderOutcome::Rendered { items: 0 });
        assert_eq!(
            page.document.to_html(),
            "<body><ul id=\"left\"><li><strong>Oak Plank</strong> Wood <strong>150 грн.</strong></li></ul><ul id=\"right\"></ul></body>"
        );
    }

    #[tokio::test]
    async fn backend_failure_is_shown_before_its_list() {
        let base = spawn_backend().await;
        let renderer = renderer_for(&format!("{}/static/index.html", base));
        let page = test_page();

        let outcome = renderer
            .render("../w_broken_get_all", page.right.clone())
            .wait()
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            RenderOutcome::Failed { error: FeedError::HttpStatus { status: 500, .. }, .. }
        ));
        assert_eq!(
            page.document.to_html(),
            "<body><ul id=\"left\"></ul><p>Error: HTTP error, status = 500 (sql: database is closed)</p><ul id=\"right\"></ul></body>"
        );
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() {
        let renderer = renderer_for(&unused_local_url());
        let page = test_page();

        let outcome = renderer.render_now("w_matherial_get_all", &page.left).await;

        assert!(matches!(
            outcome,
            RenderOutcome::Failed { error: FeedError::Transport(_), note: Some(_) }
        ));
        let html = page.document.to_html();
        assert!(html.starts_with("<body><p>Error: "));
        assert!(html.ends_with("</p><ul id=\"left\"></ul><ul id=\"right\"></ul></body>"));
    }
}
