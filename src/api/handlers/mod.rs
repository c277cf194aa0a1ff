use std::sync::{Mutex, MutexGuard};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

use crate::api::models::ErrorResponse;
use crate::services::standings::StandingsService;

pub mod admin;
pub mod standings;

/// Shared state: every request goes through the one service instance
pub struct AppState {
    pub service: Mutex<StandingsService>,
}

impl AppState {
    pub fn new(service: StandingsService) -> Self {
        Self {
            service: Mutex::new(service),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StandingsService>, Response> {
        self.service
            .lock()
            .map_err(|_| error_response(StatusCode::INTERNAL_SERVER_ERROR, "Standings state unavailable"))
    }
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}
