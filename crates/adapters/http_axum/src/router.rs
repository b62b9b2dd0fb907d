//! Axum router assembly.

use axum::Json;
use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use itemhub_app::ports::ItemRepository;

use crate::api::items::MessageBody;
use crate::state::AppState;

const GREETING: &str = "Hello! This is the schedule API service.";

/// Build the top-level axum [`Router`].
///
/// Serves the greeting at `/` and the item routes. Cross-origin requests are
/// allowed from any origin, and a [`TraceLayer`] logs each HTTP
/// request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: ItemRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .merge(crate::api::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Json<MessageBody> {
    Json(MessageBody { message: GREETING })
}
