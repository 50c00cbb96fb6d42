pub mod health;
pub mod home;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::chat::handlers::handle_chat;
use crate::recommend::handlers::handle_recommend;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/", get(home::home_handler))
        .route("/api/health", get(health::health_handler))
        .route("/api/chat", post(handle_chat))
        .route("/api/recommend", post(handle_recommend))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}
