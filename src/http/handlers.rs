/// HTTP request handlers
///
/// Each handler unpacks the request, calls the matching service operation,
/// and hands failures to ApiError with an endpoint-specific message for
/// the internal case.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::domain::Habit;
use crate::http::error::ApiError;
use crate::http::AppState;
use crate::service::{
    self, CreateHabitParams, DeleteHabitResponse, ToggleCompletionParams, UpdateHabitParams,
};

/// GET /api/habits
pub async fn list_habits(State(state): State<AppState>) -> Result<Json<Vec<Habit>>, ApiError> {
    let habits = service::list_habits(state.storage.as_ref())
        .map_err(|e| ApiError::from_service(e, "Failed to read habits data"))?;

    Ok(Json(habits))
}

/// POST /api/habits
pub async fn create_habit(
    State(state): State<AppState>,
    Json(params): Json<CreateHabitParams>,
) -> Result<(StatusCode, Json<Habit>), ApiError> {
    let habit = service::create_habit(state.storage.as_ref(), params)
        .map_err(|e| ApiError::from_service(e, "Failed to create habit"))?;

    Ok((StatusCode::CREATED, Json(habit)))
}

/// PUT /api/habits/{id}
pub async fn update_habit(
    State(state): State<AppState>,
    Path(habit_id): Path<String>,
    Json(params): Json<UpdateHabitParams>,
) -> Result<Json<Habit>, ApiError> {
    let habit = service::update_habit(state.storage.as_ref(), &habit_id, params)
        .map_err(|e| ApiError::from_service(e, "Failed to update habit"))?;

    Ok(Json(habit))
}

/// DELETE /api/habits/{id}
pub async fn delete_habit(
    State(state): State<AppState>,
    Path(habit_id): Path<String>,
) -> Result<Json<DeleteHabitResponse>, ApiError> {
    let response = service::delete_habit(state.storage.as_ref(), &habit_id)
        .map_err(|e| ApiError::from_service(e, "Failed to delete habit"))?;

    Ok(Json(response))
}

/// POST /api/habits/{id}/complete
pub async fn toggle_completion(
    State(state): State<AppState>,
    Path(habit_id): Path<String>,
    Json(params): Json<ToggleCompletionParams>,
) -> Result<Json<Habit>, ApiError> {
    let habit = service::toggle_completion(state.storage.as_ref(), &habit_id, params)
        .map_err(|e| ApiError::from_service(e, "Failed to update habit completion"))?;

    Ok(Json(habit))
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// GET /health
///
/// Reports that the process is up; it does not probe the database.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
