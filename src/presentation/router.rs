use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{OfficeConverter, PdfEngine};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{convert_handler, health_handler};
use crate::presentation::state::AppState;

pub const CONVERT_ROUTE: &str = "/forms/libreoffice/convert";

pub fn create_router<O, P>(state: AppState<O, P>) -> Router
where
    O: OfficeConverter + 'static,
    P: PdfEngine + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = state.settings.server.body_limit_mb * 1024 * 1024;

    Router::new()
        .route("/health", get(health_handler))
        .route(CONVERT_ROUTE, post(convert_handler::<O, P>))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
