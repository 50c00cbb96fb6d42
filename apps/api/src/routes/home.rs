use axum::{extract::State, response::Html};

use crate::pages::{render_index, IndexPage};
use crate::state::AppState;

/// GET /
pub async fn home_handler(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&IndexPage {
        name: &state.config.display_name,
        tagline: &state.config.tagline,
        projects: state.catalog.projects(),
    }))
}
