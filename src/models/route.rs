//! Modelo de Route
//!
//! Este módulo contiene la fila persistida Route (uno a uno con Trip) y
//! los value objects del estimado de ruta: waypoints y paradas derivadas
//! de descanso/combustible.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::utils::errors::{internal_error, AppResult};

/// Route persistida - fila de la tabla routes
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Route {
    pub id: Uuid,
    pub trip_id: Uuid,
    /// Estimado completo serializado tal como lo devolvió el estimador
    pub route_data: serde_json::Value,
    pub total_distance: Decimal,
    pub total_duration: Decimal,
    pub rest_stops: serde_json::Value,
    pub fuel_stops: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Rol de un waypoint dentro de la ruta
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WaypointRole {
    Origin,
    Destination,
    Intermediate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Waypoint {
    pub location: String,
    #[serde(rename = "type")]
    pub role: WaypointRole,
}

/// Tipo de parada derivada
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StopKind {
    RestBreak,
    SleeperBerth,
    Fuel,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteStop {
    pub location: String,
    /// Duración de la parada en horas
    pub duration: f64,
    #[serde(rename = "type")]
    pub kind: StopKind,
    pub reason: String,
}

/// Resultado del RouteEstimator: inmutable una vez calculado, solo se
/// reemplaza re-planificando el trip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteEstimate {
    pub distance_miles: f64,
    pub duration_hours: f64,
    pub waypoints: Vec<Waypoint>,
    pub rest_stops: Vec<RouteStop>,
    pub fuel_stops: Vec<RouteStop>,
}

impl Route {
    /// Construir la fila de Route a partir de un estimado
    pub fn from_estimate(trip_id: Uuid, estimate: &RouteEstimate) -> AppResult<Self> {
        let route_data = serde_json::to_value(estimate)
            .map_err(|e| internal_error(&format!("Failed to serialize route data: {}", e)))?;
        let rest_stops = serde_json::to_value(&estimate.rest_stops)
            .map_err(|e| internal_error(&format!("Failed to serialize rest stops: {}", e)))?;
        let fuel_stops = serde_json::to_value(&estimate.fuel_stops)
            .map_err(|e| internal_error(&format!("Failed to serialize fuel stops: {}", e)))?;

        Ok(Self {
            id: Uuid::new_v4(),
            trip_id,
            route_data,
            total_distance: Decimal::from_f64_retain(estimate.distance_miles)
                .unwrap_or_default()
                .round_dp(2),
            total_duration: Decimal::from_f64_retain(estimate.duration_hours)
                .unwrap_or_default()
                .round_dp(2),
            rest_stops,
            fuel_stops,
            created_at: Utc::now(),
        })
    }
}
