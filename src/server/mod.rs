//! Liveness endpoint for the polling deployment.
//!
//! Hosting platforms probe `GET /` to decide the process is alive; the
//! route returns a fixed body and nothing else is served.

use std::net::SocketAddr;

use axum::routing::get;
use axum::Router;
use tracing::info;

use crate::app::Result;

async fn health() -> &'static str {
    "OK"
}

pub fn router() -> Router {
    Router::new().route("/", get(health))
}

/// Bind and serve the liveness route until the process exits.
pub async fn run_health_server(port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Liveness server listening on {}", addr);

    axum::serve(listener, router()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_body_is_fixed() {
        assert_eq!(health().await, "OK");
    }
}
