use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::trip_controller::TripController;
use crate::dto::trip_dto::{ApiResponse, PlanTripRequest, RouteResponse, TripResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_trip_router() -> Router<AppState> {
    Router::new()
        .route("/plan", post(plan_trip))
        .route("/", get(list_trips))
        .route("/:id", get(get_trip))
        .route("/:id", delete(delete_trip))
        .route("/:id/route", get(get_trip_route))
}

fn controller(state: &AppState) -> TripController {
    TripController::new(
        state.pool.clone(),
        state.route_planner.clone(),
        state.hos_policy.clone(),
    )
}

async fn plan_trip(
    State(state): State<AppState>,
    Json(request): Json<PlanTripRequest>,
) -> Result<Json<ApiResponse<TripResponse>>, AppError> {
    let response = controller(&state).plan(request).await?;
    Ok(Json(response))
}

async fn list_trips(
    State(state): State<AppState>,
) -> Result<Json<Vec<TripResponse>>, AppError> {
    let response = controller(&state).list().await?;
    Ok(Json(response))
}

async fn get_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TripResponse>, AppError> {
    let response = controller(&state).get_by_id(id).await?;
    Ok(Json(response))
}

async fn delete_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    controller(&state).delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Trip deleted successfully"
    })))
}

async fn get_trip_route(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RouteResponse>, AppError> {
    let response = controller(&state).get_route(id).await?;
    Ok(Json(response))
}
