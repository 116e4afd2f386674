//! Constructor de logs diarios
//!
//! Dado el conjunto de periodos de actividad de un día produce el
//! LogEntryDraft con totales, remarks y el grid horario. Es un builder
//! puro: devuelve value objects y deja la persistencia al orquestador.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::hos_policy::HosPolicy;
use crate::models::activity_period::ActivityPeriodDraft;
use crate::models::log_entry::{ActivityGrid, LogEntryDraft};
use crate::models::trip::Trip;

/// Encabezado opcional del log, tomado del request de generación
#[derive(Debug, Clone, Default)]
pub struct LogHeader {
    pub driver_name: Option<String>,
    pub carrier_name: Option<String>,
    pub vehicle_numbers: Option<String>,
}

pub struct DailyLogBuilder {
    policy: HosPolicy,
}

impl DailyLogBuilder {
    pub fn new(policy: HosPolicy) -> Self {
        Self { policy }
    }

    pub fn build(
        &self,
        trip: &Trip,
        date: NaiveDate,
        periods: Vec<ActivityPeriodDraft>,
        day_hours: f64,
        header: &LogHeader,
    ) -> LogEntryDraft {
        let total_miles = self.day_miles(trip, day_hours);

        let driver_name = header
            .driver_name
            .clone()
            .or_else(|| trip.driver_name.clone())
            .unwrap_or_else(|| "Driver".to_string());

        let mut grid = ActivityGrid::new();
        for period in &periods {
            grid.apply(period);
        }

        LogEntryDraft {
            date,
            start_time: self.policy.day_start,
            end_time: self.policy.day_start,
            total_miles,
            total_hours: Decimal::from_f64_retain(day_hours)
                .unwrap_or_default()
                .round_dp(2),
            driver_name,
            carrier_name: header.carrier_name.clone().unwrap_or_default(),
            vehicle_numbers: header.vehicle_numbers.clone().unwrap_or_default(),
            remarks: generate_remarks(&periods),
            log_data: grid.to_json(),
            activity_periods: periods,
        }
    }

    /// Millas del día, proporcionales a las horas del día sobre la
    /// duración total estimada; 0 sin estimaciones
    fn day_miles(&self, trip: &Trip, day_hours: f64) -> Decimal {
        match (trip.estimated_duration_hours(), trip.estimated_distance_miles()) {
            (Some(total_hours), Some(distance)) if total_hours > 0.0 => {
                Decimal::from_f64_retain((day_hours / total_hours) * distance)
                    .unwrap_or_default()
                    .round_dp(1)
            }
            _ => Decimal::ZERO,
        }
    }
}

/// Remarks: ubicaciones de los periodos unidas por "; ", omitiendo vacías
fn generate_remarks(periods: &[ActivityPeriodDraft]) -> String {
    periods
        .iter()
        .filter(|p| !p.location.is_empty())
        .map(|p| p.location.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::activity_period::Activity;
    use crate::models::trip::TripStatus;
    use chrono::{NaiveTime, Utc};
    use uuid::Uuid;

    fn trip_with_estimates(distance: i64, duration: i64) -> Trip {
        Trip {
            id: Uuid::new_v4(),
            driver_name: Some("John Smith".to_string()),
            current_location: "New York, NY".to_string(),
            pickup_location: "Boston, MA".to_string(),
            dropoff_location: "Philadelphia, PA".to_string(),
            current_cycle_used: Decimal::ZERO,
            estimated_distance: Some(Decimal::from(distance)),
            estimated_duration: Some(Decimal::from(duration)),
            status: TripStatus::Planned,
            start_time: None,
            end_time: None,
            created_at: Utc::now(),
        }
    }

    fn period(activity: Activity, start: (u32, u32), end: (u32, u32), location: &str) -> ActivityPeriodDraft {
        ActivityPeriodDraft {
            activity,
            start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
            location: location.to_string(),
            remarks: String::new(),
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_totals_proportional_to_day_hours() {
        let builder = DailyLogBuilder::new(HosPolicy::default());
        let trip = trip_with_estimates(1000, 30);

        let draft = builder.build(&trip, date(), vec![], 24.0, &LogHeader::default());
        assert_eq!(draft.total_miles, Decimal::new(8000, 1)); // 800.0
        assert_eq!(draft.total_hours, Decimal::from(24));
    }

    #[test]
    fn test_zero_miles_without_estimates() {
        let builder = DailyLogBuilder::new(HosPolicy::default());
        let mut trip = trip_with_estimates(1000, 30);
        trip.estimated_distance = None;
        trip.estimated_duration = None;

        let draft = builder.build(&trip, date(), vec![], 10.0, &LogHeader::default());
        assert_eq!(draft.total_miles, Decimal::ZERO);
    }

    #[test]
    fn test_driver_name_fallbacks() {
        let builder = DailyLogBuilder::new(HosPolicy::default());
        let mut trip = trip_with_estimates(500, 9);

        let draft = builder.build(&trip, date(), vec![], 9.0, &LogHeader::default());
        assert_eq!(draft.driver_name, "John Smith");

        let header = LogHeader {
            driver_name: Some("Jane Doe".to_string()),
            ..Default::default()
        };
        let draft = builder.build(&trip, date(), vec![], 9.0, &header);
        assert_eq!(draft.driver_name, "Jane Doe");

        trip.driver_name = None;
        let draft = builder.build(&trip, date(), vec![], 9.0, &LogHeader::default());
        assert_eq!(draft.driver_name, "Driver");
    }

    #[test]
    fn test_remarks_skip_empty_locations() {
        let builder = DailyLogBuilder::new(HosPolicy::default());
        let trip = trip_with_estimates(500, 9);
        let periods = vec![
            period(Activity::OnDutyNotDriving, (6, 0), (7, 0), "Boston, MA"),
            period(Activity::Driving, (7, 0), (15, 0), ""),
            period(Activity::OffDuty, (15, 0), (6, 0), "Rest area"),
        ];

        let draft = builder.build(&trip, date(), periods, 9.0, &LogHeader::default());
        assert_eq!(draft.remarks, "Boston, MA; Rest area");
    }

    #[test]
    fn test_grid_preserves_emission_order() {
        let builder = DailyLogBuilder::new(HosPolicy::default());
        let trip = trip_with_estimates(500, 9);
        let periods = vec![
            period(Activity::Driving, (7, 0), (18, 0), ""),
            period(Activity::OnDutyNotDriving, (17, 0), (19, 0), ""),
        ];

        let draft = builder.build(&trip, date(), periods, 9.0, &LogHeader::default());
        assert_eq!(draft.log_data["16:00"], "driving");
        assert_eq!(draft.log_data["17:00"], "on_duty_not_driving");
        assert_eq!(draft.log_data["18:00"], "on_duty_not_driving");
        assert_eq!(draft.log_data.as_object().unwrap().len(), 24);
    }
}
