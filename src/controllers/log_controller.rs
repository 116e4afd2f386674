//! Controller de logs diarios
//!
//! Genera los logs de un trip con el TripLogPlanner y los persiste de
//! forma atómica. Política de regeneración: replace — el lote nuevo
//! reemplaza todos los logs existentes del trip en la misma transacción.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::config::hos_policy::HosPolicy;
use crate::dto::log_dto::{GenerateLogsRequest, LogEntryResponse};
use crate::repositories::log_repository::LogRepository;
use crate::repositories::trip_repository::TripRepository;
use crate::services::daily_log_builder::LogHeader;
use crate::services::trip_log_planner::TripLogPlanner;
use crate::state::TripLocks;
use crate::utils::errors::{not_found_error, AppError};

pub struct LogController {
    pool: PgPool,
    planner: TripLogPlanner,
    trip_locks: TripLocks,
}

impl LogController {
    pub fn new(pool: PgPool, policy: HosPolicy, trip_locks: TripLocks) -> Self {
        Self {
            pool,
            planner: TripLogPlanner::new(policy),
            trip_locks,
        }
    }

    /// Generar (o regenerar) los logs diarios de un trip
    pub async fn generate(
        &self,
        trip_id: Uuid,
        request: GenerateLogsRequest,
    ) -> Result<Vec<LogEntryResponse>, AppError> {
        request.validate()?;

        let trip = TripRepository::new(self.pool.clone())
            .find_by_id(trip_id)
            .await?
            .ok_or_else(|| not_found_error("Trip", &trip_id.to_string()))?;

        // Serializar la generación por trip para no insertar fechas duplicadas
        let _guard = self.trip_locks.acquire(trip_id).await;

        let header = LogHeader {
            driver_name: request.driver_name,
            carrier_name: request.carrier_name,
            vehicle_numbers: request.vehicle_numbers,
        };

        let drafts = self.planner.generate(&trip, request.start_date, &header)?;

        // El lote completo se escribe o no se escribe nada
        let mut tx = self.pool.begin().await?;
        let replaced = LogRepository::delete_by_trip(&mut *tx, trip_id).await?;
        if replaced > 0 {
            log::info!("♻️ Replacing {} existing log entries for trip {}", replaced, trip_id);
        }

        let mut responses = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let (entry, periods) = LogRepository::insert_log(&mut *tx, trip_id, draft).await?;
            responses.push(LogEntryResponse::from_parts(entry, periods));
        }
        tx.commit().await?;

        log::info!("✅ Generated {} log entries for trip {}", responses.len(), trip_id);
        Ok(responses)
    }

    /// Listar los logs existentes de un trip con sus periodos
    pub async fn list(&self, trip_id: Uuid) -> Result<Vec<LogEntryResponse>, AppError> {
        let trip_repo = TripRepository::new(self.pool.clone());
        if trip_repo.find_by_id(trip_id).await?.is_none() {
            return Err(not_found_error("Trip", &trip_id.to_string()));
        }

        let log_repo = LogRepository::new(self.pool.clone());
        let entries = log_repo.find_by_trip(trip_id).await?;

        let mut responses = Vec::with_capacity(entries.len());
        for entry in entries {
            let periods = log_repo.find_periods(entry.id).await?;
            responses.push(LogEntryResponse::from_parts(entry, periods));
        }

        Ok(responses)
    }
}
