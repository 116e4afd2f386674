//! Tests de regeneración de logs contra Postgres
//!
//! Verifican la política de regeneración (replace atómico) sobre la base
//! de datos real. Requieren DATABASE_URL; sin ella cada test retorna sin
//! ejercitar nada.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use hos_trip_planner::config::hos_policy::HosPolicy;
use hos_trip_planner::controllers::log_controller::LogController;
use hos_trip_planner::database::connection;
use hos_trip_planner::dto::log_dto::GenerateLogsRequest;
use hos_trip_planner::models::trip::{Trip, TripStatus};
use hos_trip_planner::repositories::trip_repository::TripRepository;
use hos_trip_planner::state::TripLocks;

async fn test_pool() -> Option<PgPool> {
    let url = std::env::var("DATABASE_URL").ok()?;
    let pool = connection::create_pool(Some(&url)).await.ok()?;
    connection::run_migrations(&pool).await.ok()?;
    Some(pool)
}

fn planned_trip() -> Trip {
    Trip {
        id: Uuid::new_v4(),
        driver_name: Some("John Smith".to_string()),
        current_location: "New York, NY".to_string(),
        pickup_location: "Boston, MA".to_string(),
        dropoff_location: "Philadelphia, PA".to_string(),
        current_cycle_used: Decimal::from(20),
        estimated_distance: Some(Decimal::from(1000)),
        estimated_duration: Some(Decimal::from(30)),
        status: TripStatus::Planned,
        start_time: None,
        end_time: None,
        created_at: Utc::now(),
    }
}

fn request(start_date: NaiveDate) -> GenerateLogsRequest {
    GenerateLogsRequest {
        start_date,
        driver_name: None,
        carrier_name: None,
        vehicle_numbers: None,
    }
}

#[tokio::test]
async fn test_regenerating_logs_replaces_previous_batch() {
    let Some(pool) = test_pool().await else { return };

    let trip = planned_trip();
    {
        let mut conn = pool.acquire().await.unwrap();
        TripRepository::create(&mut conn, &trip).await.unwrap();
    }

    let controller = LogController::new(pool.clone(), HosPolicy::default(), TripLocks::new());

    let day1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let first = controller.generate(trip.id, request(day1)).await.unwrap();
    assert_eq!(first.len(), 2);

    // Regenerar con otra fecha de inicio: el lote nuevo reemplaza al
    // anterior, no se acumulan filas
    let day2 = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    let second = controller.generate(trip.id, request(day2)).await.unwrap();
    assert_eq!(second.len(), 2);

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM log_entries WHERE trip_id = $1")
        .bind(trip.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, 2);

    let dates: Vec<NaiveDate> =
        sqlx::query_scalar("SELECT date FROM log_entries WHERE trip_id = $1 ORDER BY date")
            .bind(trip.id)
            .fetch_all(&pool)
            .await
            .unwrap();
    assert_eq!(
        dates,
        vec![day2, NaiveDate::from_ymd_opt(2024, 2, 2).unwrap()]
    );

    // La eliminación del trip arrastra logs y periodos en cascada
    assert!(TripRepository::new(pool.clone()).delete(trip.id).await.unwrap());
}

#[tokio::test]
async fn test_regenerating_with_same_date_is_idempotent() {
    let Some(pool) = test_pool().await else { return };

    let trip = planned_trip();
    {
        let mut conn = pool.acquire().await.unwrap();
        TripRepository::create(&mut conn, &trip).await.unwrap();
    }

    let controller = LogController::new(pool.clone(), HosPolicy::default(), TripLocks::new());
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    controller.generate(trip.id, request(start)).await.unwrap();
    let second = controller.generate(trip.id, request(start)).await.unwrap();
    assert_eq!(second.len(), 2);

    let stored: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM log_entries WHERE trip_id = $1")
        .bind(trip.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, 2);

    assert!(TripRepository::new(pool.clone()).delete(trip.id).await.unwrap());
}
