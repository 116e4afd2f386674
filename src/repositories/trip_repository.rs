use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::trip::Trip;
use crate::utils::errors::AppError;

pub struct TripRepository {
    pool: PgPool,
}

impl TripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insertar un trip dentro de una transacción abierta por el caller
    pub async fn create(conn: &mut PgConnection, trip: &Trip) -> Result<Trip, AppError> {
        let result = sqlx::query_as::<_, Trip>(
            r#"
            INSERT INTO trips (
                id, driver_name, current_location, pickup_location, dropoff_location,
                current_cycle_used, estimated_distance, estimated_duration, status,
                start_time, end_time, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(trip.id)
        .bind(&trip.driver_name)
        .bind(&trip.current_location)
        .bind(&trip.pickup_location)
        .bind(&trip.dropoff_location)
        .bind(trip.current_cycle_used)
        .bind(trip.estimated_distance)
        .bind(trip.estimated_duration)
        .bind(trip.status)
        .bind(trip.start_time)
        .bind(trip.end_time)
        .bind(trip.created_at)
        .fetch_one(conn)
        .await?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Trip>, AppError> {
        let result = sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }

    pub async fn list_all(&self) -> Result<Vec<Trip>, AppError> {
        let result = sqlx::query_as::<_, Trip>("SELECT * FROM trips ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        Ok(result)
    }

    /// Eliminar un trip; la route y los logs caen en cascada
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM trips WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
