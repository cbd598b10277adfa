//! HTTP server initialization and runtime setup.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;

use crate::application::services::{LogDispatch, ProviderDispatch};
use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes the provider dispatch seam (currently [`LogDispatch`]; real
/// provider integrations plug in here) and the Axum server.
///
/// # Errors
///
/// Returns an error if the bind address is invalid, the bind fails, or the
/// server hits a runtime error.
pub async fn run(config: Config) -> Result<()> {
    let dispatch: Arc<dyn ProviderDispatch> = Arc::new(LogDispatch::new());
    let state = AppState::new(dispatch);

    let app = app_router(
        state,
        Duration::from_secs(config.request_timeout_seconds),
    );

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
