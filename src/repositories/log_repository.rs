use chrono::Utc;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::activity_period::ActivityPeriod;
use crate::models::log_entry::{LogEntry, LogEntryDraft};
use crate::utils::errors::{map_unique_violation, AppError};

pub struct LogRepository {
    pool: PgPool,
}

impl LogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Borrar todos los logs de un trip (política de regeneración: replace)
    pub async fn delete_by_trip(conn: &mut PgConnection, trip_id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM log_entries WHERE trip_id = $1")
            .bind(trip_id)
            .execute(conn)
            .await?;

        Ok(result.rows_affected())
    }

    /// Insertar un log diario y sus periodos, preservando el orden de
    /// emisión en la columna sequence. UNIQUE(trip_id, date) respalda la
    /// invariante de un log por día.
    pub async fn insert_log(
        conn: &mut PgConnection,
        trip_id: Uuid,
        draft: LogEntryDraft,
    ) -> Result<(LogEntry, Vec<ActivityPeriod>), AppError> {
        let entry = sqlx::query_as::<_, LogEntry>(
            r#"
            INSERT INTO log_entries (
                id, trip_id, date, start_time, end_time, total_miles, total_hours,
                driver_name, carrier_name, vehicle_numbers, remarks, log_data, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(trip_id)
        .bind(draft.date)
        .bind(draft.start_time)
        .bind(draft.end_time)
        .bind(draft.total_miles)
        .bind(draft.total_hours)
        .bind(&draft.driver_name)
        .bind(&draft.carrier_name)
        .bind(&draft.vehicle_numbers)
        .bind(&draft.remarks)
        .bind(&draft.log_data)
        .bind(Utc::now())
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            map_unique_violation(
                e,
                &format!("A log entry already exists for trip {} on {}", trip_id, draft.date),
            )
        })?;

        let mut periods = Vec::with_capacity(draft.activity_periods.len());
        for (sequence, period) in draft.activity_periods.into_iter().enumerate() {
            let row = sqlx::query_as::<_, ActivityPeriod>(
                r#"
                INSERT INTO activity_periods (
                    id, log_entry_id, sequence, activity, start_time, end_time,
                    location, remarks, created_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                RETURNING *
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(entry.id)
            .bind(sequence as i32)
            .bind(period.activity)
            .bind(period.start_time)
            .bind(period.end_time)
            .bind(&period.location)
            .bind(&period.remarks)
            .bind(Utc::now())
            .fetch_one(&mut *conn)
            .await?;

            periods.push(row);
        }

        Ok((entry, periods))
    }

    pub async fn find_by_trip(&self, trip_id: Uuid) -> Result<Vec<LogEntry>, AppError> {
        let result = sqlx::query_as::<_, LogEntry>(
            "SELECT * FROM log_entries WHERE trip_id = $1 ORDER BY date ASC",
        )
        .bind(trip_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    pub async fn find_periods(&self, log_entry_id: Uuid) -> Result<Vec<ActivityPeriod>, AppError> {
        let result = sqlx::query_as::<_, ActivityPeriod>(
            "SELECT * FROM activity_periods WHERE log_entry_id = $1 ORDER BY sequence ASC",
        )
        .bind(log_entry_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }
}
