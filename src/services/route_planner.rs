//! Cliente del servicio de rutas externo
//!
//! Este módulo define el colaborador RoutePlanner: dado origen y destino
//! devuelve distancia, duración y waypoints. En producción se usa la API
//! de OpenRouteService; sin API key se usa el stub determinístico.

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::models::route::{Waypoint, WaypointRole};
use crate::utils::errors::{AppError, AppResult};

/// Ruta cruda devuelta por el planner, antes de derivar paradas
#[derive(Debug, Clone)]
pub struct PlannedRoute {
    pub distance_miles: f64,
    pub duration_hours: f64,
    pub waypoints: Vec<Waypoint>,
}

/// Colaborador externo de ruteo
#[async_trait]
pub trait RoutePlanner: Send + Sync {
    async fn get_route(&self, origin: &str, destination: &str) -> AppResult<PlannedRoute>;
}

fn endpoint_waypoints(origin: &str, destination: &str) -> Vec<Waypoint> {
    vec![
        Waypoint {
            location: origin.to_string(),
            role: WaypointRole::Origin,
        },
        Waypoint {
            location: destination.to_string(),
            role: WaypointRole::Destination,
        },
    ]
}

/// Stub determinístico: siempre 500 millas / 8.5 horas
///
/// Reemplaza a la API real en desarrollo y tests.
pub struct StaticRoutePlanner;

impl StaticRoutePlanner {
    pub const DISTANCE_MILES: f64 = 500.0;
    pub const DURATION_HOURS: f64 = 8.5;
}

#[async_trait]
impl RoutePlanner for StaticRoutePlanner {
    async fn get_route(&self, origin: &str, destination: &str) -> AppResult<PlannedRoute> {
        Ok(PlannedRoute {
            distance_miles: Self::DISTANCE_MILES,
            duration_hours: Self::DURATION_HOURS,
            waypoints: endpoint_waypoints(origin, destination),
        })
    }
}

#[derive(Debug, Deserialize)]
struct OrsDirectionsResponse {
    routes: Vec<OrsRoute>,
}

#[derive(Debug, Deserialize)]
struct OrsRoute {
    summary: OrsSummary,
}

#[derive(Debug, Deserialize)]
struct OrsSummary {
    /// Metros
    distance: f64,
    /// Segundos
    duration: f64,
}

const METERS_PER_MILE: f64 = 1609.34;

/// Cliente de OpenRouteService
pub struct OpenRouteServicePlanner {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl OpenRouteServicePlanner {
    pub fn new(base_url: String, api_key: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            client,
        }
    }
}

#[async_trait]
impl RoutePlanner for OpenRouteServicePlanner {
    async fn get_route(&self, origin: &str, destination: &str) -> AppResult<PlannedRoute> {
        log::info!("🗺️ Requesting route: {} -> {}", origin, destination);

        let url = format!("{}/driving-hgv", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("start", origin),
                ("end", destination),
            ])
            .header("User-Agent", "HosTripPlanner/1.0")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::ExternalApi(format!("Routing service timed out: {}", e))
                } else {
                    AppError::ExternalApi(format!("Routing service request failed: {}", e))
                }
            })?;

        let status = response.status();
        log::info!("📡 Routing response status: {}", status);

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::error!("❌ Routing failed with status {}: {}", status, error_text);
            return Err(AppError::ExternalApi(format!(
                "Routing service returned {}: {}",
                status, error_text
            )));
        }

        let ors_response: OrsDirectionsResponse = response.json().await.map_err(|e| {
            AppError::ExternalApi(format!("Failed to parse routing response: {}", e))
        })?;

        let route = ors_response.routes.first().ok_or_else(|| {
            AppError::ExternalApi("Routing service returned no routes".to_string())
        })?;

        let distance_miles = route.summary.distance / METERS_PER_MILE;
        let duration_hours = route.summary.duration / 3600.0;

        log::info!(
            "✅ Route found: {:.1} miles, {:.2} hours",
            distance_miles,
            duration_hours
        );

        Ok(PlannedRoute {
            distance_miles,
            duration_hours,
            waypoints: endpoint_waypoints(origin, destination),
        })
    }
}

/// Seleccionar el planner según configuración: con ORS_API_KEY se usa la
/// API real, sin ella el stub
pub fn planner_from_config(config: &EnvironmentConfig) -> Arc<dyn RoutePlanner> {
    match &config.ors_api_key {
        Some(key) => {
            log::info!("🌍 Using OpenRouteService planner");
            Arc::new(OpenRouteServicePlanner::new(
                config.ors_base_url.clone(),
                key.clone(),
            ))
        }
        None => {
            log::warn!("⚠️ ORS_API_KEY not set, using static route planner");
            Arc::new(StaticRoutePlanner)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_planner_is_deterministic() {
        let planner = StaticRoutePlanner;
        let route = planner.get_route("Boston, MA", "Philadelphia, PA").await.unwrap();

        assert_eq!(route.distance_miles, 500.0);
        assert_eq!(route.duration_hours, 8.5);
        assert_eq!(route.waypoints.len(), 2);
        assert_eq!(route.waypoints[0].role, WaypointRole::Origin);
        assert_eq!(route.waypoints[1].role, WaypointRole::Destination);
    }
}
