//! Stub backend for transport and resource-client tests.
//!
//! Each test gets its own router on an ephemeral port; dropping the handle
//! stops the server.

use std::net::{Ipv4Addr, SocketAddr};

use axum::Router;
use tokio::sync::oneshot;

pub(crate) struct StubServer {
    pub base_url: String,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl Drop for StubServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Serve `app` on an ephemeral localhost port until the handle is dropped.
pub(crate) async fn spawn_stub(app: Router) -> StubServer {
    let listener = tokio::net::TcpListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))
        .await
        .expect("stub server should bind");
    let addr = listener.local_addr().expect("stub server address");

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
        };
        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("Stub server error: {e}");
        }
    });

    StubServer {
        base_url: format!("http://{addr}"),
        shutdown_tx: Some(shutdown_tx),
    }
}
