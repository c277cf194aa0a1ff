use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{error_response, AppState};
use crate::api::models::TeamOption;
use crate::domain::MatchInput;
use crate::services::standings::engine_error;

pub async fn get_all_standings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let service = match state.lock() {
        Ok(service) => service,
        Err(response) => return response,
    };

    Json(service.all_standings()).into_response()
}

pub async fn get_group_standings(
    State(state): State<Arc<AppState>>,
    Path(group): Path<String>,
) -> impl IntoResponse {
    let service = match state.lock() {
        Ok(service) => service,
        Err(response) => return response,
    };

    match service.standings(&group) {
        Some(rows) => Json(rows).into_response(),
        None => error_response(StatusCode::NOT_FOUND, format!("Unknown group: {}", group)),
    }
}

pub async fn get_group_teams(
    State(state): State<Arc<AppState>>,
    Path(group): Path<String>,
) -> impl IntoResponse {
    let service = match state.lock() {
        Ok(service) => service,
        Err(response) => return response,
    };

    match service.teams(&group) {
        Some(teams) => {
            let options: Vec<TeamOption> = teams.into_iter().map(TeamOption::from).collect();
            Json(options).into_response()
        }
        None => error_response(StatusCode::NOT_FOUND, format!("Unknown group: {}", group)),
    }
}

pub async fn post_match(
    State(state): State<Arc<AppState>>,
    Json(input): Json<MatchInput>,
) -> impl IntoResponse {
    let mut service = match state.lock() {
        Ok(service) => service,
        Err(response) => return response,
    };

    match service.record_match(&input) {
        Ok(outcome) => Json(outcome).into_response(),
        Err(e) => match engine_error(&e) {
            Some(engine) if engine.is_internal() => {
                error_response(StatusCode::INTERNAL_SERVER_ERROR, engine.to_string())
            }
            Some(engine) => error_response(StatusCode::UNPROCESSABLE_ENTITY, engine.to_string()),
            None => {
                log::error!("Failed to record match: {:?}", e);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("Storage error: {}", e))
            }
        },
    }
}
