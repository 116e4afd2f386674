//! Controller de trips
//!
//! Orquesta la planificación: valida el request, pide el estimado de
//! ruta y persiste trip + route de forma atómica (ambos o ninguno).

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::config::hos_policy::HosPolicy;
use crate::dto::trip_dto::{ApiResponse, PlanTripRequest, RouteResponse, TripResponse};
use crate::models::route::{Route, RouteEstimate};
use crate::models::trip::{Trip, TripStatus};
use crate::repositories::route_repository::RouteRepository;
use crate::repositories::trip_repository::TripRepository;
use crate::services::route_estimator::RouteEstimator;
use crate::services::route_planner::RoutePlanner;
use crate::utils::errors::{not_found_error, validation_error, AppError};
use crate::utils::validation::{validate_not_empty, validate_range};

pub struct TripController {
    pool: PgPool,
    estimator: RouteEstimator,
}

impl TripController {
    pub fn new(pool: PgPool, planner: Arc<dyn RoutePlanner>, policy: HosPolicy) -> Self {
        Self {
            pool,
            estimator: RouteEstimator::new(planner, policy),
        }
    }

    /// Planificar un trip completo: estimado de ruta + trip + route
    pub async fn plan(
        &self,
        request: PlanTripRequest,
    ) -> Result<ApiResponse<TripResponse>, AppError> {
        Self::validate_request(&request)?;

        let estimate = self
            .estimator
            .estimate(&request.pickup_location, &request.dropoff_location)
            .await?;

        let trip = Self::trip_from_request(&request, &estimate);
        let route = Route::from_estimate(trip.id, &estimate)?;

        // Trip y route se escriben juntos o no se escribe nada
        let mut tx = self.pool.begin().await?;
        let trip = TripRepository::create(&mut *tx, &trip).await?;
        RouteRepository::create(&mut *tx, &route).await?;
        tx.commit().await?;

        log::info!("✅ Trip {} planned: {} -> {}", trip.id, trip.pickup_location, trip.dropoff_location);

        Ok(ApiResponse::success_with_message(
            TripResponse::from(trip),
            "Trip planned successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<TripResponse, AppError> {
        let trip = TripRepository::new(self.pool.clone())
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Trip", &id.to_string()))?;

        Ok(TripResponse::from(trip))
    }

    pub async fn list(&self) -> Result<Vec<TripResponse>, AppError> {
        let trips = TripRepository::new(self.pool.clone()).list_all().await?;
        Ok(trips.into_iter().map(TripResponse::from).collect())
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let deleted = TripRepository::new(self.pool.clone()).delete(id).await?;
        if !deleted {
            return Err(not_found_error("Trip", &id.to_string()));
        }
        Ok(())
    }

    pub async fn get_route(&self, trip_id: Uuid) -> Result<RouteResponse, AppError> {
        let route = RouteRepository::new(self.pool.clone())
            .find_by_trip(trip_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Route not found".to_string()))?;

        Ok(RouteResponse::from(route))
    }

    /// Validar el request antes de cualquier cómputo o escritura
    fn validate_request(request: &PlanTripRequest) -> Result<(), AppError> {
        request.validate()?;

        validate_not_empty(&request.current_location)
            .map_err(|_| validation_error("current_location", "must not be blank"))?;
        validate_not_empty(&request.pickup_location)
            .map_err(|_| validation_error("pickup_location", "must not be blank"))?;
        validate_not_empty(&request.dropoff_location)
            .map_err(|_| validation_error("dropoff_location", "must not be blank"))?;

        validate_range(request.current_cycle_used, Decimal::ZERO, Decimal::from(70))
            .map_err(|_| validation_error("current_cycle_used", "must be between 0 and 70 hours"))?;

        Ok(())
    }

    /// Construir el trip nuevo con las estimaciones del route estimator
    pub fn trip_from_request(request: &PlanTripRequest, estimate: &RouteEstimate) -> Trip {
        Trip {
            id: Uuid::new_v4(),
            driver_name: request.driver_name.clone(),
            current_location: request.current_location.clone(),
            pickup_location: request.pickup_location.clone(),
            dropoff_location: request.dropoff_location.clone(),
            current_cycle_used: request.current_cycle_used.round_dp(2),
            estimated_distance: Some(
                Decimal::from_f64_retain(estimate.distance_miles)
                    .unwrap_or_default()
                    .round_dp(2),
            ),
            estimated_duration: Some(
                Decimal::from_f64_retain(estimate.duration_hours)
                    .unwrap_or_default()
                    .round_dp(2),
            ),
            status: TripStatus::Planned,
            start_time: None,
            end_time: None,
            created_at: Utc::now(),
        }
    }
}
