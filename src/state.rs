//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::config::hos_policy::HosPolicy;
use crate::services::route_planner::{planner_from_config, RoutePlanner};

/// Locks en memoria por trip para serializar la (re)generación de logs.
/// Sin esto dos requests concurrentes podrían intentar insertar logs
/// duplicados para las mismas fechas; la constraint UNIQUE(trip_id, date)
/// queda como respaldo en storage.
#[derive(Clone, Default)]
pub struct TripLocks {
    inner: Arc<Mutex<HashMap<Uuid, Arc<Mutex<()>>>>>,
}

impl TripLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tomar el lock del trip; se libera al soltar el guard
    pub async fn acquire(&self, trip_id: Uuid) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.inner.lock().await;
            // Acota el mapa: un strong count de 1 significa que ningún
            // guard ni clone sigue vivo, solo la entrada del mapa
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks
                .entry(trip_id)
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }
}

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub hos_policy: HosPolicy,
    pub route_planner: Arc<dyn RoutePlanner>,
    pub trip_locks: TripLocks,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        let route_planner = planner_from_config(&config);
        Self {
            pool,
            config,
            hos_policy: HosPolicy::from_env(),
            route_planner,
            trip_locks: TripLocks::new(),
        }
    }
}
