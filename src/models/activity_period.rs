//! Modelo de ActivityPeriod
//!
//! Un ActivityPeriod es un sub-intervalo del día de un LogEntry con un
//! estado de servicio (duty status). Un end_time anterior al start_time
//! se interpreta como cruce de medianoche.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado de servicio - mapea al ENUM activity_kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "activity_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Activity {
    OffDuty,
    SleeperBerth,
    Driving,
    OnDutyNotDriving,
}

impl Activity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Activity::OffDuty => "off_duty",
            Activity::SleeperBerth => "sleeper_berth",
            Activity::Driving => "driving",
            Activity::OnDutyNotDriving => "on_duty_not_driving",
        }
    }

    /// Etiqueta legible para la columna de la planilla
    pub fn display_name(&self) -> &'static str {
        match self {
            Activity::OffDuty => "Off Duty",
            Activity::SleeperBerth => "Sleeper Berth",
            Activity::Driving => "Driving",
            Activity::OnDutyNotDriving => "On Duty (Not Driving)",
        }
    }
}

/// ActivityPeriod persistido - fila de la tabla activity_periods
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ActivityPeriod {
    pub id: Uuid,
    pub log_entry_id: Uuid,
    /// Orden de emisión del scheduler; la reconstrucción del grid depende de él
    pub sequence: i32,
    pub activity: Activity,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: String,
    pub remarks: String,
    pub created_at: DateTime<Utc>,
}

/// Borrador de ActivityPeriod producido por el scheduler (sin identidad)
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityPeriodDraft {
    pub activity: Activity,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: String,
    pub remarks: String,
}

impl ActivityPeriodDraft {
    pub fn duration_hours(&self) -> f64 {
        duration_hours(self.start_time, self.end_time)
    }
}

impl ActivityPeriod {
    pub fn duration_hours(&self) -> f64 {
        duration_hours(self.start_time, self.end_time)
    }
}

/// Duración en horas entre dos horas del día; end < start cruza medianoche
pub fn duration_hours(start: NaiveTime, end: NaiveTime) -> f64 {
    let mut minutes = (end - start).num_minutes();
    if minutes < 0 {
        minutes += 24 * 60;
    }
    minutes as f64 / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_duration_same_day() {
        assert_eq!(duration_hours(t(7, 0), t(18, 0)), 11.0);
        assert_eq!(duration_hours(t(15, 0), t(15, 30)), 0.5);
    }

    #[test]
    fn test_duration_crossing_midnight() {
        assert_eq!(duration_hours(t(22, 0), t(6, 0)), 8.0);
        assert_eq!(duration_hours(t(19, 0), t(6, 0)), 11.0);
    }

    #[test]
    fn test_activity_labels() {
        assert_eq!(Activity::OnDutyNotDriving.as_str(), "on_duty_not_driving");
        assert_eq!(Activity::SleeperBerth.display_name(), "Sleeper Berth");
    }
}
