//! Scheduler de actividades diarias
//!
//! Función pura: dado el contexto de un día (índice, horas restantes del
//! trip, ubicaciones) produce los periodos de actividad ordenados de ese
//! día de 24 horas. El bloque de conducción se deriva del presupuesto
//! restante en lugar de ser una plantilla fija: se recorta en el último
//! día y se parte con una pausa de 30 minutos cuando supera las 8 horas
//! acumuladas.

use chrono::{Duration, NaiveTime};

use crate::config::hos_policy::HosPolicy;
use crate::models::activity_period::{Activity, ActivityPeriodDraft};

/// Contexto de un día dentro del loop de planificación
#[derive(Debug, Clone)]
pub struct DayContext<'a> {
    pub day_index: u32,
    pub is_first_day: bool,
    pub is_last_day: bool,
    /// Horas del trip aún no asignadas a días anteriores
    pub remaining_trip_hours: f64,
    pub pickup_location: &'a str,
    pub dropoff_location: &'a str,
}

pub struct ActivityScheduler {
    policy: HosPolicy,
}

impl ActivityScheduler {
    pub fn new(policy: HosPolicy) -> Self {
        Self { policy }
    }

    /// Construir los periodos ordenados de un día
    ///
    /// El día nominal arranca en policy.day_start (06:00) y cierra en la
    /// misma hora del día siguiente; el periodo final de off_duty cruza
    /// medianoche.
    pub fn build_day(&self, ctx: &DayContext) -> Vec<ActivityPeriodDraft> {
        let mut periods = Vec::new();
        let mut cursor = self.policy.day_start;

        if ctx.is_first_day {
            let end = advance(cursor, self.policy.pickup_duration_hours);
            periods.push(ActivityPeriodDraft {
                activity: Activity::OnDutyNotDriving,
                start_time: cursor,
                end_time: end,
                location: ctx.pickup_location.to_string(),
                remarks: "Pickup and pre-trip inspection".to_string(),
            });
            cursor = end;
        }

        let driving_hours = ctx
            .remaining_trip_hours
            .min(self.policy.max_driving_hours)
            .max(0.0);

        if driving_hours > 0.0 {
            let transit_location = if ctx.is_first_day {
                format!("{} to {}", ctx.pickup_location, ctx.dropoff_location)
            } else {
                format!("Continuing to {}", ctx.dropoff_location)
            };

            if driving_hours > self.policy.break_required_after_hours {
                // Primer tramo hasta el límite de 8 horas acumuladas
                let leg_end = advance(cursor, self.policy.break_required_after_hours);
                periods.push(ActivityPeriodDraft {
                    activity: Activity::Driving,
                    start_time: cursor,
                    end_time: leg_end,
                    location: transit_location.clone(),
                    remarks: "Driving to destination".to_string(),
                });
                cursor = leg_end;

                let break_end = advance(cursor, self.policy.break_duration_hours);
                periods.push(ActivityPeriodDraft {
                    activity: Activity::OffDuty,
                    start_time: cursor,
                    end_time: break_end,
                    location: "Rest stop".to_string(),
                    remarks: format!(
                        "30-minute break after {} hours driving",
                        self.policy.break_required_after_hours
                    ),
                });
                cursor = break_end;

                let leg2_end = advance(
                    cursor,
                    driving_hours - self.policy.break_required_after_hours,
                );
                periods.push(ActivityPeriodDraft {
                    activity: Activity::Driving,
                    start_time: cursor,
                    end_time: leg2_end,
                    location: transit_location,
                    remarks: "Driving to destination".to_string(),
                });
                cursor = leg2_end;
            } else {
                let end = advance(cursor, driving_hours);
                periods.push(ActivityPeriodDraft {
                    activity: Activity::Driving,
                    start_time: cursor,
                    end_time: end,
                    location: transit_location,
                    remarks: "Driving to destination".to_string(),
                });
                cursor = end;
            }
        }

        if ctx.is_last_day {
            let end = advance(cursor, self.policy.dropoff_duration_hours);
            periods.push(ActivityPeriodDraft {
                activity: Activity::OnDutyNotDriving,
                start_time: cursor,
                end_time: end,
                location: ctx.dropoff_location.to_string(),
                remarks: "Dropoff and post-trip inspection".to_string(),
            });
            cursor = end;
        }

        // Resto del día fuera de servicio hasta el arranque del día siguiente
        if cursor != self.policy.day_start {
            periods.push(ActivityPeriodDraft {
                activity: Activity::OffDuty,
                start_time: cursor,
                end_time: self.policy.day_start,
                location: if ctx.is_last_day {
                    ctx.dropoff_location.to_string()
                } else {
                    "Rest area".to_string()
                },
                remarks: "Off duty rest".to_string(),
            });
        }

        periods
    }
}

fn advance(time: NaiveTime, hours: f64) -> NaiveTime {
    time + Duration::minutes((hours * 60.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn scheduler() -> ActivityScheduler {
        ActivityScheduler::new(HosPolicy::default())
    }

    fn ctx(day_index: u32, is_first: bool, is_last: bool, remaining: f64) -> DayContext<'static> {
        DayContext {
            day_index,
            is_first_day: is_first,
            is_last_day: is_last,
            remaining_trip_hours: remaining,
            pickup_location: "Boston, MA",
            dropoff_location: "Philadelphia, PA",
        }
    }

    #[test]
    fn test_first_day_of_multi_day_trip() {
        let periods = scheduler().build_day(&ctx(0, true, false, 30.0));

        // pickup, drive 8h, break, drive 3h, off duty
        assert_eq!(periods.len(), 5);
        assert_eq!(periods[0].activity, Activity::OnDutyNotDriving);
        assert_eq!(periods[0].start_time, t(6, 0));
        assert_eq!(periods[0].end_time, t(7, 0));
        assert_eq!(periods[0].location, "Boston, MA");

        assert_eq!(periods[1].activity, Activity::Driving);
        assert_eq!(periods[1].end_time, t(15, 0));

        assert_eq!(periods[2].activity, Activity::OffDuty);
        assert_eq!(periods[2].duration_hours(), 0.5);

        assert_eq!(periods[3].activity, Activity::Driving);
        assert_eq!(periods[3].end_time, t(18, 30));

        assert_eq!(periods[4].activity, Activity::OffDuty);
        assert_eq!(periods[4].start_time, t(18, 30));
        assert_eq!(periods[4].end_time, t(6, 0));
    }

    #[test]
    fn test_driving_hours_capped_at_eleven() {
        let periods = scheduler().build_day(&ctx(0, true, false, 30.0));
        let driving: f64 = periods
            .iter()
            .filter(|p| p.activity == Activity::Driving)
            .map(|p| p.duration_hours())
            .sum();
        assert_eq!(driving, 11.0);
    }

    #[test]
    fn test_short_final_day_has_no_break() {
        // 6 horas restantes: un solo bloque de conducción sin pausa
        let periods = scheduler().build_day(&ctx(1, false, true, 6.0));

        assert_eq!(periods.len(), 3);
        assert_eq!(periods[0].activity, Activity::Driving);
        assert_eq!(periods[0].start_time, t(6, 0));
        assert_eq!(periods[0].end_time, t(12, 0));
        assert_eq!(periods[0].location, "Continuing to Philadelphia, PA");

        assert_eq!(periods[1].activity, Activity::OnDutyNotDriving);
        assert_eq!(periods[1].location, "Philadelphia, PA");
        assert_eq!(periods[1].end_time, t(13, 0));

        assert_eq!(periods[2].activity, Activity::OffDuty);
        assert_eq!(periods[2].end_time, t(6, 0));
        assert_eq!(periods[2].location, "Philadelphia, PA");
    }

    #[test]
    fn test_single_day_trip_has_pickup_and_dropoff() {
        let periods = scheduler().build_day(&ctx(0, true, true, 8.5));

        assert_eq!(periods[0].activity, Activity::OnDutyNotDriving);
        assert_eq!(periods[0].remarks, "Pickup and pre-trip inspection");

        // 8.5h > 8h: la pausa cae tras 8 horas de conducción
        assert_eq!(periods[1].activity, Activity::Driving);
        assert_eq!(periods[1].duration_hours(), 8.0);
        assert_eq!(periods[2].activity, Activity::OffDuty);
        assert_eq!(periods[3].activity, Activity::Driving);
        assert_eq!(periods[3].duration_hours(), 0.5);

        let dropoff = &periods[4];
        assert_eq!(dropoff.activity, Activity::OnDutyNotDriving);
        assert_eq!(dropoff.remarks, "Dropoff and post-trip inspection");

        assert_eq!(periods.last().unwrap().activity, Activity::OffDuty);
    }

    #[test]
    fn test_off_duty_rest_satisfies_minimum() {
        // Día intermedio más cargado: 11h conduciendo + pausa
        let periods = scheduler().build_day(&ctx(1, false, false, 24.0));
        let rest = periods.last().unwrap();
        assert_eq!(rest.activity, Activity::OffDuty);
        assert!(rest.duration_hours() >= HosPolicy::default().min_off_duty_hours);
    }
}
