//! Fake ncs.io website
//!
//! Serves minimal HTML listings in the shape of the real site and records
//! every request it receives, so tests can check what the server asked for.

use super::constants::*;
use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// A request received by the fake ncs.io
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub path: String,
    pub params: HashMap<String, String>,
}

impl UpstreamRequest {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

pub type UpstreamLog = Arc<Mutex<Vec<UpstreamRequest>>>;

fn play_button(id: &str, name: &str, artists_raw: &str, genre: &str) -> String {
    format!(
        r#"<a href="javascript:;" class="btn black player-play" data-tid="{id}" data-track="{name}" data-artistraw="{artists_raw}" data-genre="{genre}" data-cover="https://ncs.io/covers/{id}.jpg" data-url="https://ncsmusic.s3.amazonaws.com/tracks/{id}.mp3"><i class="fas fa-play"></i></a>"#
    )
}

fn listing_page(buttons: &[String]) -> String {
    let items: String = buttons
        .iter()
        .map(|button| format!("<div class=\"item\">{}</div>\n", button))
        .collect();
    format!(
        "<!DOCTYPE html>\n<html><head><title>NCS</title></head><body>\n\
         <nav><a href=\"/music\" class=\"nav-link\">Music</a></nav>\n{}</body></html>\n",
        items
    )
}

/// First page of the latest releases: three songs and a button with no title
pub fn latest_page() -> String {
    listing_page(&[
        play_button(
            SONG_1_ID,
            SONG_1_NAME,
            "&lt;a href=&quot;https://ncs.io/artist/100/janji&quot;&gt;Janji&lt;/a&gt;, \
             &lt;a href=&quot;https://ncs.io/artist/101/johnning&quot;&gt;Johnning&lt;/a&gt;",
            "House",
        ),
        play_button(
            "7c3e1c0d-1111-4a4a-9d3e-000000000002",
            SONG_2_NAME,
            "Lost Sky, Chris Linton",
            "Chill",
        ),
        play_button(
            "7c3e1c0d-1111-4a4a-9d3e-000000000003",
            "Fearless pt.II",
            "Lost Sky",
            "Trap",
        ),
        play_button("7c3e1c0d-1111-4a4a-9d3e-000000000004", "", "Nobody", "Bass"),
    ])
}

pub fn search_page() -> String {
    listing_page(&[play_button(
        "7c3e1c0d-1111-4a4a-9d3e-000000000005",
        SEARCH_SONG_NAME,
        "Elektronomia",
        "House",
    )])
}

fn record(log: &UpstreamLog, uri: &Uri, params: HashMap<String, String>) {
    log.lock().unwrap().push(UpstreamRequest {
        path: uri.path().to_string(),
        params,
    });
}

async fn music(
    State(log): State<UpstreamLog>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let first_page = params.get("page").is_some_and(|page| page == "1");
    record(&log, &uri, params);

    if first_page {
        Html(latest_page()).into_response()
    } else {
        Html(listing_page(&[])).into_response()
    }
}

async fn music_search(
    State(log): State<UpstreamLog>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let failing = params.get("q").is_some_and(|q| q == FAILING_QUERY);
    record(&log, &uri, params);

    if failing {
        (StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable").into_response()
    } else {
        Html(search_page()).into_response()
    }
}

/// Spawns the fake ncs.io on a random port.
/// Returns (base_url, request_log, shutdown_sender)
pub async fn spawn_fake_ncs() -> (String, UpstreamLog, tokio::sync::oneshot::Sender<()>) {
    let log = UpstreamLog::default();

    let app = Router::new()
        .route("/music", get(music))
        .route("/music-search", get(music_search))
        .with_state(log.clone());

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake ncs.io");
    let port = listener
        .local_addr()
        .expect("Failed to get fake ncs.io address")
        .port();

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .expect("Fake ncs.io failed");
    });

    (format!("http://127.0.0.1:{}", port), log, shutdown_tx)
}
