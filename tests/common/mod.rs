//! Shared utilities for integration testing.

use std::net::SocketAddr;

use ingress_probe::{HttpServer, ProbeConfig, Shutdown};
use tokio::net::TcpListener;

/// Spawn a probe server on an ephemeral port.
///
/// Returns the bound address and the shutdown handle; dropping the handle is
/// fine, triggering it stops the server.
pub async fn spawn_server(config: ProbeConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, receiver).await;
    });

    (addr, shutdown)
}

/// Client that does not follow redirects, so redirect probes can be
/// asserted on directly.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
