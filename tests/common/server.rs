//! Test server lifecycle management
//!
//! Each test gets an isolated API server backed by its own fake ncs.io.

use super::constants::*;
use super::fixtures::{spawn_fake_ncs, UpstreamLog, UpstreamRequest};
use ncs_api_server::catalog::ncs::NcsClient;
use ncs_api_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// Test server instance
///
/// When dropped, both the API server and the fake ncs.io shut down.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// Base URL of the fake ncs.io the server reads from
    #[allow(dead_code)]
    pub ncs_base_url: String,

    // Private fields - keep resources alive until drop
    ncs_requests: UpstreamLog,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
    _ncs_shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a new test server on a random port
    ///
    /// # Panics
    ///
    /// Panics if the fake ncs.io or the server fail to start, or if the server
    /// doesn't become ready within timeout.
    pub async fn spawn() -> Self {
        let (ncs_base_url, ncs_requests, ncs_shutdown_tx) = spawn_fake_ncs().await;

        let catalog = NcsClient::new(&ncs_base_url, NCS_TIMEOUT_SECS)
            .expect("Failed to create ncs client");

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        // Create shutdown channel
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            requests_logging_level: RequestsLoggingLevel::None,
            bind_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port,
        };
        let app = make_app(config, Arc::new(catalog));

        // Spawn server in background task with graceful shutdown
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            ncs_base_url,
            ncs_requests,
            _shutdown_tx: Some(shutdown_tx),
            _ncs_shutdown_tx: Some(ncs_shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Every request the fake ncs.io received so far
    #[allow(dead_code)]
    pub fn ncs_requests(&self) -> Vec<UpstreamRequest> {
        self.ncs_requests.lock().unwrap().clone()
    }

    /// Waits for the server to become ready by polling the /health endpoint
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/health", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(tx) = self._ncs_shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
