//! Modelo de LogEntry
//!
//! Un LogEntry representa un día calendario de servicio para un trip,
//! con totales agregados y el grid horario de 24 slots. Como máximo
//! existe un LogEntry por (trip, date).

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::FromRow;
use uuid::Uuid;

use super::activity_period::{Activity, ActivityPeriodDraft};

/// LogEntry persistido - fila de la tabla log_entries
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LogEntry {
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
    /// Grid horario serializado: 24 claves "00:00".."23:00"
    pub log_data: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Borrador de log diario producido por el DailyLogBuilder, todavía sin
/// identidad ni persistencia
#[derive(Debug, Clone)]
pub struct LogEntryDraft {
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
    pub activity_periods: Vec<ActivityPeriodDraft>,
}

/// Grid de actividades de 24 horas
///
/// Array fijo indexado por hora con semántica last-write-wins: los
/// periodos aplicados después sobreescriben los slots de los anteriores,
/// por lo que el orden de emisión del scheduler debe preservarse.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityGrid([Activity; 24]);

impl Default for ActivityGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityGrid {
    /// Grid con las 24 horas en off_duty
    pub fn new() -> Self {
        Self([Activity::OffDuty; 24])
    }

    pub fn slot(&self, hour: usize) -> Activity {
        self.0[hour]
    }

    /// Aplicar un periodo: llena cada slot de hora completa en
    /// [start.hour, end.hour). Si end.hour < start.hour el periodo cruza
    /// medianoche y llena [start.hour, 24) y [0, end.hour).
    pub fn apply(&mut self, period: &ActivityPeriodDraft) {
        use chrono::Timelike;

        let start_hour = period.start_time.hour() as usize;
        let end_hour = period.end_time.hour() as usize;

        if end_hour < start_hour {
            for hour in start_hour..24 {
                self.0[hour] = period.activity;
            }
            for hour in 0..end_hour {
                self.0[hour] = period.activity;
            }
        } else {
            for hour in start_hour..end_hour {
                self.0[hour] = period.activity;
            }
        }
    }

    /// Cantidad de slots asignados a una actividad
    pub fn slots_for(&self, activity: Activity) -> usize {
        self.0.iter().filter(|a| **a == activity).count()
    }

    /// Serializar al formato de log_data: {"00:00": "off_duty", ...}
    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::with_capacity(24);
        for (hour, activity) in self.0.iter().enumerate() {
            map.insert(format!("{:02}:00", hour), json!(activity.as_str()));
        }
        serde_json::Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn period(activity: Activity, start: (u32, u32), end: (u32, u32)) -> ActivityPeriodDraft {
        ActivityPeriodDraft {
            activity,
            start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            location: String::new(),
            remarks: String::new(),
        }
    }

    #[test]
    fn test_new_grid_is_all_off_duty() {
        let grid = ActivityGrid::new();
        assert_eq!(grid.slots_for(Activity::OffDuty), 24);
    }

    #[test]
    fn test_apply_fills_whole_hour_slots() {
        let mut grid = ActivityGrid::new();
        grid.apply(&period(Activity::Driving, (7, 0), (18, 0)));

        assert_eq!(grid.slot(6), Activity::OffDuty);
        assert_eq!(grid.slot(7), Activity::Driving);
        assert_eq!(grid.slot(17), Activity::Driving);
        assert_eq!(grid.slot(18), Activity::OffDuty);
        assert_eq!(grid.slots_for(Activity::Driving), 11);
    }

    #[test]
    fn test_apply_crossing_midnight() {
        let mut grid = ActivityGrid::new();
        grid.apply(&period(Activity::SleeperBerth, (22, 0), (6, 0)));

        assert_eq!(grid.slot(21), Activity::OffDuty);
        assert_eq!(grid.slot(22), Activity::SleeperBerth);
        assert_eq!(grid.slot(23), Activity::SleeperBerth);
        assert_eq!(grid.slot(0), Activity::SleeperBerth);
        assert_eq!(grid.slot(5), Activity::SleeperBerth);
        assert_eq!(grid.slot(6), Activity::OffDuty);
    }

    #[test]
    fn test_later_periods_overwrite_earlier_slots() {
        let mut grid = ActivityGrid::new();
        grid.apply(&period(Activity::Driving, (7, 0), (18, 0)));
        grid.apply(&period(Activity::OnDutyNotDriving, (17, 0), (19, 0)));

        assert_eq!(grid.slot(16), Activity::Driving);
        assert_eq!(grid.slot(17), Activity::OnDutyNotDriving);
        assert_eq!(grid.slot(18), Activity::OnDutyNotDriving);
    }

    #[test]
    fn test_to_json_has_24_keys() {
        let grid = ActivityGrid::new();
        let value = grid.to_json();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 24);
        assert_eq!(map["00:00"], "off_duty");
        assert_eq!(map["23:00"], "off_duty");
    }
}
