pub mod assets;
pub mod config;
pub mod middleware;
pub mod observability;
pub mod page;
pub mod routes;
pub mod server;
pub mod template;

pub use routes::AppState;

/// Create the app router with every layer the server runs with
///
/// Used by `serve` and by integration tests, which drive it with `oneshot`.
pub fn create_app(state: AppState) -> axum::Router {
    use axum::middleware as axum_middleware;
    use tower_http::{compression::CompressionLayer, trace::TraceLayer};

    routes::router(state)
        .layer(axum_middleware::from_fn(
            middleware::cache_control_middleware,
        ))
        // before compression
        .layer(axum_middleware::map_response(
            middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}
