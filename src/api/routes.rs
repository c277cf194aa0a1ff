use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use crate::api::handlers::{
    admin::admin_reset,
    standings::{get_all_standings, get_group_standings, get_group_teams, post_match},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/standings", get(get_all_standings))
        .route("/api/standings/:group", get(get_group_standings))
        .route("/api/teams/:group", get(get_group_teams))
        .route("/api/matches", post(post_match))
        .route("/api/admin/reset", post(admin_reset))
        .with_state(state)
}
