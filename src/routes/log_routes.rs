use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::log_controller::LogController;
use crate::dto::log_dto::{GenerateLogsRequest, LogEntryResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_log_router() -> Router<AppState> {
    Router::new()
        .route("/:id/logs", post(generate_logs))
        .route("/:id/logs", get(list_logs))
}

fn controller(state: &AppState) -> LogController {
    LogController::new(
        state.pool.clone(),
        state.hos_policy.clone(),
        state.trip_locks.clone(),
    )
}

async fn generate_logs(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<GenerateLogsRequest>,
) -> Result<Json<Vec<LogEntryResponse>>, AppError> {
    let response = controller(&state).generate(id, request).await?;
    Ok(Json(response))
}

async fn list_logs(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<LogEntryResponse>>, AppError> {
    let response = controller(&state).list(id).await?;
    Ok(Json(response))
}
