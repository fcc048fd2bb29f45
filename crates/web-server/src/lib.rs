use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing::get};
use reporting::DailyOrderSummaryRepository;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<DailyOrderSummaryRepository>,
}

/// The main function to configure and run the web server.
///
/// The repository is built by the caller before the server starts, so a bad
/// dataset fails the process at startup instead of surfacing as 500s later.
pub async fn run_server(
    addr: SocketAddr,
    repository: Arc<DailyOrderSummaryRepository>,
) -> anyhow::Result<()> {
    let app_state = Arc::new(AppState { repository });
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    // --- DEFINE THE APPLICATION ROUTES ---
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/order_summary/:date", get(handlers::get_order_summary))
        .with_state(app_state)
        .layer(cors)
        // This middleware logs information about every incoming request.
        .layer(TraceLayer::new_for_http());

    tracing::info!("Web server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
