use super::handlers;
use super::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer};

/// API Gateway's payload ceiling, applied locally too
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Pipeline endpoints
        .route(
            "/upload",
            post(handlers::upload).options(handlers::upload_preflight),
        )
        .route(
            "/summaries",
            get(handlers::list_summaries).options(handlers::summaries_preflight),
        );

    // Browser client
    if let Some(dir) = &state.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        // Responses produced outside the pipeline handlers (e.g. 413 from the
        // body limit) still need the origin header for the browser to read them
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
