//! Planificador de logs del trip
//!
//! Orquesta el cálculo puro: divide la duración total del trip en días
//! calendario (división techo por 24), invoca el scheduler y el builder
//! por día y devuelve los borradores de logs en orden de fecha.

use chrono::{Duration, NaiveDate};

use crate::config::hos_policy::HosPolicy;
use crate::models::log_entry::LogEntryDraft;
use crate::models::trip::Trip;
use crate::services::activity_scheduler::{ActivityScheduler, DayContext};
use crate::services::daily_log_builder::{DailyLogBuilder, LogHeader};
use crate::utils::errors::{AppError, AppResult};

pub struct TripLogPlanner {
    scheduler: ActivityScheduler,
    builder: DailyLogBuilder,
}

impl TripLogPlanner {
    pub fn new(policy: HosPolicy) -> Self {
        Self {
            scheduler: ActivityScheduler::new(policy.clone()),
            builder: DailyLogBuilder::new(policy),
        }
    }

    /// Generar los borradores de logs diarios de un trip
    ///
    /// Falla con MissingEstimate si el trip no tiene duración estimada.
    /// No persiste nada: el caller escribe el lote completo en una
    /// transacción o no escribe nada.
    pub fn generate(
        &self,
        trip: &Trip,
        start_date: NaiveDate,
        header: &LogHeader,
    ) -> AppResult<Vec<LogEntryDraft>> {
        let total_hours = trip.estimated_duration_hours().ok_or_else(|| {
            AppError::MissingEstimate(format!(
                "Trip {} must have an estimated duration before generating logs",
                trip.id
            ))
        })?;

        let days_needed = (total_hours / 24.0).ceil() as i64;
        log::info!(
            "📋 Generating {} daily logs for trip {} ({} hours total)",
            days_needed,
            trip.id,
            total_hours
        );

        let mut logs = Vec::with_capacity(days_needed as usize);
        let mut current_date = start_date;
        let mut remaining_hours = total_hours;

        for day in 0..days_needed {
            let day_hours = remaining_hours.min(24.0);
            let ctx = DayContext {
                day_index: day as u32,
                is_first_day: day == 0,
                is_last_day: day == days_needed - 1,
                remaining_trip_hours: remaining_hours,
                pickup_location: &trip.pickup_location,
                dropoff_location: &trip.dropoff_location,
            };

            let periods = self.scheduler.build_day(&ctx);
            logs.push(self.builder.build(trip, current_date, periods, day_hours, header));

            current_date += Duration::days(1);
            remaining_hours -= day_hours;
        }

        Ok(logs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::trip::TripStatus;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn trip(duration_hours: &str, distance_miles: &str) -> Trip {
        Trip {
            id: Uuid::new_v4(),
            driver_name: None,
            current_location: "New York, NY".to_string(),
            pickup_location: "Boston, MA".to_string(),
            dropoff_location: "Philadelphia, PA".to_string(),
            current_cycle_used: Decimal::ZERO,
            estimated_distance: Some(distance_miles.parse().unwrap()),
            estimated_duration: Some(duration_hours.parse().unwrap()),
            status: TripStatus::Planned,
            start_time: None,
            end_time: None,
            created_at: Utc::now(),
        }
    }

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_missing_estimate_is_rejected() {
        let planner = TripLogPlanner::new(HosPolicy::default());
        let mut trip = trip("30", "1000");
        trip.estimated_duration = None;

        let result = planner.generate(&trip, start(), &LogHeader::default());
        assert!(matches!(result, Err(AppError::MissingEstimate(_))));
    }

    #[test]
    fn test_fifteen_hour_trip_fits_one_log() {
        let planner = TripLogPlanner::new(HosPolicy::default());
        let logs = planner
            .generate(&trip("15", "900"), start(), &LogHeader::default())
            .unwrap();

        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].date, start());
        assert_eq!(logs[0].total_hours, Decimal::from(15));
    }

    #[test]
    fn test_thirty_hour_trip_splits_into_two_days() {
        let planner = TripLogPlanner::new(HosPolicy::default());
        let logs = planner
            .generate(&trip("30", "1000"), start(), &LogHeader::default())
            .unwrap();

        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].date, start());
        assert_eq!(logs[1].date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());

        let total: Decimal = logs.iter().map(|l| l.total_hours).sum();
        assert_eq!(total, Decimal::from(30));

        let miles: Decimal = logs.iter().map(|l| l.total_miles).sum();
        assert_eq!(miles, Decimal::from(1000));
    }

    #[test]
    fn test_day_count_is_ceiling_of_duration() {
        let planner = TripLogPlanner::new(HosPolicy::default());
        for (duration, expected_days) in [("8.5", 1), ("24", 1), ("24.1", 2), ("49", 3), ("72", 3)] {
            let logs = planner
                .generate(&trip(duration, "500"), start(), &LogHeader::default())
                .unwrap();
            assert_eq!(logs.len(), expected_days, "duration {}", duration);
        }
    }

    #[test]
    fn test_logs_are_in_ascending_date_order() {
        let planner = TripLogPlanner::new(HosPolicy::default());
        let logs = planner
            .generate(&trip("72", "3000"), start(), &LogHeader::default())
            .unwrap();

        let mut dates: Vec<NaiveDate> = logs.iter().map(|l| l.date).collect();
        let sorted = dates.clone();
        dates.sort();
        assert_eq!(dates, sorted);
    }

    #[test]
    fn test_every_log_has_a_complete_grid() {
        let planner = TripLogPlanner::new(HosPolicy::default());
        let logs = planner
            .generate(&trip("49", "2000"), start(), &LogHeader::default())
            .unwrap();

        let allowed = ["off_duty", "sleeper_berth", "driving", "on_duty_not_driving"];
        for log in &logs {
            let grid = log.log_data.as_object().unwrap();
            assert_eq!(grid.len(), 24);
            for value in grid.values() {
                assert!(allowed.contains(&value.as_str().unwrap()));
            }
        }
    }
}
