use crate::handlers::{health, matches};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let match_routes = Router::new()
        .route("/start", post(matches::start_match))
        .route("/point", post(matches::add_point))
        .route("/undo", post(matches::undo_point))
        .route("/{match_id}", get(matches::get_match))
        .route("/{match_id}/export", get(matches::export_match));

    Router::new()
        .nest("/match", match_routes)
        .route("/healthz", get(health::healthz))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
