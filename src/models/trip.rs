//! Modelo de Trip
//!
//! Un Trip es la raíz del agregado: sus Route y LogEntries se eliminan
//! en cascada con él. Las estimaciones de distancia/duración quedan en
//! NULL hasta que se calcula la ruta.

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado del trip - mapea al ENUM trip_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "trip_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Planned,
    InProgress,
    Completed,
    Cancelled,
}

impl TripStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            TripStatus::Planned => "Planned",
            TripStatus::InProgress => "In Progress",
            TripStatus::Completed => "Completed",
            TripStatus::Cancelled => "Cancelled",
        }
    }
}

/// Trip principal - mapea a la tabla trips
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Trip {
    pub id: Uuid,
    pub driver_name: Option<String>,
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    /// Horas ya usadas del ciclo de 70h/8 días (0-70, dos decimales)
    pub current_cycle_used: Decimal,
    pub estimated_distance: Option<Decimal>,
    pub estimated_duration: Option<Decimal>,
    pub status: TripStatus,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Trip {
    /// Duración total real en horas, 0 mientras falte algún timestamp
    pub fn total_duration_hours(&self) -> f64 {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => (end - start).num_seconds() as f64 / 3600.0,
            _ => 0.0,
        }
    }

    /// El trip necesita más de un log diario
    pub fn requires_multiple_logs(&self) -> bool {
        self.estimated_duration
            .map(|d| d > Decimal::from(24))
            .unwrap_or(false)
    }

    /// Duración estimada como f64 para los cálculos del planner
    pub fn estimated_duration_hours(&self) -> Option<f64> {
        self.estimated_duration.and_then(|d| d.to_f64())
    }

    /// Distancia estimada como f64 para los cálculos del planner
    pub fn estimated_distance_miles(&self) -> Option<f64> {
        self.estimated_distance.and_then(|d| d.to_f64())
    }
}
