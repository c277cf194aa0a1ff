use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{error_response, AppState};
use crate::api::models::ResetRequest;

/// Destructive; the body must carry `"confirm": true`
pub async fn admin_reset(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ResetRequest>,
) -> impl IntoResponse {
    if !request.confirm {
        return error_response(StatusCode::BAD_REQUEST, "Reset requires explicit confirmation");
    }

    let mut service = match state.lock() {
        Ok(service) => service,
        Err(response) => return response,
    };

    match service.reset() {
        Ok(()) => {
            log::info!("Admin triggered reset completed");
            Json(service.all_standings()).into_response()
        }
        Err(e) => {
            log::error!("Reset failed: {:?}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, format!("Reset failed: {}", e))
        }
    }
}
