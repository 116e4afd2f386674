//! Estimador de rutas
//!
//! Combina el RoutePlanner externo con la derivación de paradas exigidas
//! por HOS: pausas de descanso según horas de conducción implícitas y
//! paradas de combustible cada 1000 millas.

use std::sync::Arc;

use crate::config::hos_policy::HosPolicy;
use crate::models::route::{RouteEstimate, RouteStop, StopKind};
use crate::services::route_planner::RoutePlanner;
use crate::utils::errors::AppResult;

pub struct RouteEstimator {
    planner: Arc<dyn RoutePlanner>,
    policy: HosPolicy,
}

impl RouteEstimator {
    pub fn new(planner: Arc<dyn RoutePlanner>, policy: HosPolicy) -> Self {
        Self { planner, policy }
    }

    /// Obtener la ruta del planner y derivar las paradas
    pub async fn estimate(&self, origin: &str, destination: &str) -> AppResult<RouteEstimate> {
        let planned = self.planner.get_route(origin, destination).await?;

        let estimate = RouteEstimate {
            rest_stops: self.rest_stops_for_distance(planned.distance_miles),
            fuel_stops: self.fuel_stops_for_distance(planned.distance_miles),
            distance_miles: planned.distance_miles,
            duration_hours: planned.duration_hours,
            waypoints: planned.waypoints,
        };

        log::info!(
            "🛣️ Estimate ready: {:.1} mi, {} rest stops, {} fuel stops",
            estimate.distance_miles,
            estimate.rest_stops.len(),
            estimate.fuel_stops.len()
        );

        Ok(estimate)
    }

    /// Paradas de descanso según las horas de conducción implícitas en la
    /// distancia (distancia / velocidad promedio)
    pub fn rest_stops_for_distance(&self, distance_miles: f64) -> Vec<RouteStop> {
        let mut stops = Vec::new();
        let driving_hours = distance_miles / self.policy.average_speed_mph;

        if driving_hours > self.policy.break_required_after_hours {
            stops.push(RouteStop {
                location: format!("Rest Stop at {:.0} miles", distance_miles * 0.6),
                duration: self.policy.break_duration_hours,
                kind: StopKind::RestBreak,
                reason: format!(
                    "30-minute break required after {} hours driving",
                    self.policy.break_required_after_hours
                ),
            });
        }

        if driving_hours > self.policy.rest_required_after_hours {
            stops.push(RouteStop {
                location: format!("Rest Area at {:.0} miles", distance_miles * 0.8),
                duration: self.policy.sleeper_rest_duration_hours,
                kind: StopKind::SleeperBerth,
                reason: format!(
                    "10-hour rest required after {} hours driving",
                    self.policy.rest_required_after_hours
                ),
            });
        }

        stops
    }

    /// Una parada de combustible en cada múltiplo entero del intervalo,
    /// excluyendo el punto final de la ruta
    pub fn fuel_stops_for_distance(&self, distance_miles: f64) -> Vec<RouteStop> {
        let mut stops = Vec::new();
        let mut fuel_miles = self.policy.fuel_stop_interval_miles;

        while fuel_miles < distance_miles {
            stops.push(RouteStop {
                location: format!("Fuel Stop at {:.0} miles", fuel_miles),
                duration: self.policy.fuel_stop_duration_hours,
                kind: StopKind::Fuel,
                reason: format!(
                    "Fuel stop every {:.0} miles",
                    self.policy.fuel_stop_interval_miles
                ),
            });
            fuel_miles += self.policy.fuel_stop_interval_miles;
        }

        stops
    }
}
