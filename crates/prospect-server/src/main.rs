use std::net::SocketAddr;
use std::path::Path;

use prospect_server::{create_router, DocumentStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("prospect_server=info")),
        )
        .init();

    let addr: SocketAddr = std::env::var("PROSPECT_SERVER_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8787".to_string())
        .parse()?;
    let db_path =
        std::env::var("PROSPECT_SERVER_DB").unwrap_or_else(|_| "prospect-server.db".to_string());

    let store = DocumentStore::open(Path::new(&db_path))?;
    let app = create_router(store);

    tracing::info!(%addr, db = %db_path, "prospect server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
