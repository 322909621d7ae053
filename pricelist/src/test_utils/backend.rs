//! Local catalogue backend for adapter tests
//!
//! Mimics the backend's JSON envelope on two routes plus a failing one.

use std::net::{SocketAddr, TcpListener as StdTcpListener};

use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::json;

use super::OAK_PLANK_FEED;

/// Start the backend on an ephemeral port; returns `http://127.0.0.1:PORT`
pub async fn spawn_backend() -> String {
    let app = Router::new()
        .route(
            "/w_matherial_get_all",
            get(|| async {
                Json(serde_json::from_str::<serde_json::Value>(OAK_PLANK_FEED).unwrap())
            }),
        )
        .route(
            "/w_product_get_all",
            get(|| async { Json(json!({ "value": null, "error": "" })) }),
        )
        .route(
            "/w_broken_get_all",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "value": null, "error": "sql: database is closed" })),
                )
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    base_url(addr)
}

/// A base URL nothing listens on
pub fn unused_local_url() -> String {
    let listener = StdTcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("{}/", base_url(addr))
}

fn base_url(addr: SocketAddr) -> String {
    format!("http://{}", addr)
}
