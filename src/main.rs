use std::env;
use std::sync::Arc;

use points_ledger::Ledger;
use points_ledger::http;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .with_writer(std::io::stderr)
        .init();

    let port: u16 = env::args()
        .nth(1)
        .map(|raw| raw.parse().expect("usage: points-ledger [port]"))
        .unwrap_or(DEFAULT_PORT);

    let ledger = Arc::new(RwLock::new(Ledger::new()));
    let app = http::router(ledger);

    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("failed to bind port");
    info!(port, "points ledger listening");

    axum::serve(listener, app).await.expect("server error");
}
