use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::route::Route;
use crate::utils::errors::AppError;

pub struct RouteRepository {
    pool: PgPool,
}

impl RouteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insertar la route dentro de la misma transacción que su trip
    pub async fn create(conn: &mut PgConnection, route: &Route) -> Result<Route, AppError> {
        let result = sqlx::query_as::<_, Route>(
            r#"
            INSERT INTO routes (
                id, trip_id, route_data, total_distance, total_duration,
                rest_stops, fuel_stops, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(route.id)
        .bind(route.trip_id)
        .bind(&route.route_data)
        .bind(route.total_distance)
        .bind(route.total_duration)
        .bind(&route.rest_stops)
        .bind(&route.fuel_stops)
        .bind(route.created_at)
        .fetch_one(conn)
        .await?;

        Ok(result)
    }

    pub async fn find_by_trip(&self, trip_id: Uuid) -> Result<Option<Route>, AppError> {
        let result = sqlx::query_as::<_, Route>("SELECT * FROM routes WHERE trip_id = $1")
            .bind(trip_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result)
    }
}
