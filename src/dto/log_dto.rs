use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::activity_period::{Activity, ActivityPeriod};
use crate::models::log_entry::LogEntry;

// Request para generar los logs diarios de un trip
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateLogsRequest {
    /// Fecha ISO del primer día de servicio
    pub start_date: NaiveDate,

    #[validate(length(max = 255))]
    pub driver_name: Option<String>,

    #[validate(length(max = 255))]
    pub carrier_name: Option<String>,

    #[validate(length(max = 255))]
    pub vehicle_numbers: Option<String>,
}

// Response de un periodo de actividad
#[derive(Debug, Serialize)]
pub struct ActivityPeriodResponse {
    pub id: Uuid,
    pub activity: Activity,
    pub activity_display: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: String,
    pub remarks: String,
    pub duration_hours: f64,
}

impl From<ActivityPeriod> for ActivityPeriodResponse {
    fn from(period: ActivityPeriod) -> Self {
        Self {
            duration_hours: period.duration_hours(),
            activity_display: period.activity.display_name().to_string(),
            id: period.id,
            activity: period.activity,
            start_time: period.start_time,
            end_time: period.end_time,
            location: period.location,
            remarks: period.remarks,
        }
    }
}

// Response de un log diario con sus periodos ordenados
#[derive(Debug, Serialize)]
pub struct LogEntryResponse {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub total_miles: Decimal,
    pub total_hours: Decimal,
    pub driver_name: String,
    pub carrier_name: String,
    pub vehicle_numbers: String,
    pub remarks: String,
    pub log_data: serde_json::Value,
    pub activity_periods: Vec<ActivityPeriodResponse>,
    pub created_at: DateTime<Utc>,
}

impl LogEntryResponse {
    pub fn from_parts(entry: LogEntry, periods: Vec<ActivityPeriod>) -> Self {
        Self {
            id: entry.id,
            trip_id: entry.trip_id,
            date: entry.date,
            start_time: entry.start_time,
            end_time: entry.end_time,
            total_miles: entry.total_miles,
            total_hours: entry.total_hours,
            driver_name: entry.driver_name,
            carrier_name: entry.carrier_name,
            vehicle_numbers: entry.vehicle_numbers,
            remarks: entry.remarks,
            log_data: entry.log_data,
            activity_periods: periods.into_iter().map(Into::into).collect(),
            created_at: entry.created_at,
        }
    }
}
