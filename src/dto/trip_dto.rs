use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::route::Route;
use crate::models::trip::{Trip, TripStatus};

// Request para planificar un trip completo (ruta + estimaciones)
#[derive(Debug, Deserialize, Validate)]
pub struct PlanTripRequest {
    #[validate(length(min = 1, max = 255))]
    pub current_location: String,

    #[validate(length(min = 1, max = 255))]
    pub pickup_location: String,

    #[validate(length(min = 1, max = 255))]
    pub dropoff_location: String,

    /// Horas ya usadas del ciclo 70h/8 días (0-70)
    pub current_cycle_used: Decimal,

    #[validate(length(max = 255))]
    pub driver_name: Option<String>,

    #[validate(length(max = 255))]
    pub carrier_name: Option<String>,

    #[validate(length(max = 255))]
    pub vehicle_numbers: Option<String>,
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

// Response de trip
#[derive(Debug, Serialize)]
pub struct TripResponse {
    pub id: Uuid,
    pub driver_name: Option<String>,
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub current_cycle_used: Decimal,
    pub estimated_distance: Option<Decimal>,
    pub estimated_duration: Option<Decimal>,
    pub status: TripStatus,
    pub status_display: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub total_duration: f64,
    pub requires_multiple_logs: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Trip> for TripResponse {
    fn from(trip: Trip) -> Self {
        Self {
            total_duration: trip.total_duration_hours(),
            requires_multiple_logs: trip.requires_multiple_logs(),
            status_display: trip.status.display_name().to_string(),
            id: trip.id,
            driver_name: trip.driver_name,
            current_location: trip.current_location,
            pickup_location: trip.pickup_location,
            dropoff_location: trip.dropoff_location,
            current_cycle_used: trip.current_cycle_used,
            estimated_distance: trip.estimated_distance,
            estimated_duration: trip.estimated_duration,
            status: trip.status,
            start_time: trip.start_time,
            end_time: trip.end_time,
            created_at: trip.created_at,
        }
    }
}

// Response de ruta
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub route_data: serde_json::Value,
    pub total_distance: Decimal,
    pub total_duration: Decimal,
    pub rest_stops: serde_json::Value,
    pub fuel_stops: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl From<Route> for RouteResponse {
    fn from(route: Route) -> Self {
        Self {
            id: route.id,
            trip_id: route.trip_id,
            route_data: route.route_data,
            total_distance: route.total_distance,
            total_duration: route.total_duration,
            rest_stops: route.rest_stops,
            fuel_stops: route.fuel_stops,
            created_at: route.created_at,
        }
    }
}
