//! Shared utilities for integration testing.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use uuid::Uuid;

use issue_tracker::{HttpServer, IssueStore, ServerConfig, Shutdown};

/// A running server instance backed by its own throwaway database.
///
/// The server shuts down when the handle's coordinator is triggered or
/// dropped at the end of the test.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, project: &str) -> String {
        format!("http://{}/api/issues/{}", self.addr, project)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Spawn the full server on an ephemeral port with an isolated SQLite file.
pub async fn spawn_server() -> TestServer {
    let mut config = ServerConfig::default();
    let db_path = std::env::temp_dir().join(format!("issue-tracker-test-{}.db", Uuid::new_v4()));
    config.database.url = format!("sqlite://{}", db_path.display());

    let store = IssueStore::connect(&config.database)
        .await
        .expect("store should open");

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("listener should bind");
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(&config, store);
    let rx = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    TestServer { addr, shutdown }
}
