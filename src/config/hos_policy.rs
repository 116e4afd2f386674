//! Política de Hours of Service
//!
//! Constantes regulatorias del ciclo diario HOS. Se inyectan como
//! configuración para poder probar variantes jurisdiccionales sin tocar
//! los algoritmos.

use chrono::NaiveTime;
use serde::Serialize;
use std::env;

/// Límites HOS y parámetros de planificación de ruta
#[derive(Debug, Clone, Serialize)]
pub struct HosPolicy {
    /// Máximo de horas de conducción por día (regla de 11 horas)
    pub max_driving_hours: f64,
    /// Ventana máxima de servicio por día (regla de 14 horas)
    pub max_on_duty_hours: f64,
    /// Descanso mínimo fuera de servicio entre días (regla de 10 horas)
    pub min_off_duty_hours: f64,
    /// Límite del ciclo de 8 días (regla de 70 horas)
    pub max_cycle_hours: f64,
    /// Horas de conducción acumuladas que exigen una pausa de 30 minutos
    pub break_required_after_hours: f64,
    /// Horas de conducción que exigen un descanso largo en sleeper berth
    pub rest_required_after_hours: f64,
    /// Duración de la pausa de 30 minutos
    pub break_duration_hours: f64,
    /// Duración del descanso en sleeper berth
    pub sleeper_rest_duration_hours: f64,
    /// Intervalo de paradas de combustible en millas
    pub fuel_stop_interval_miles: f64,
    /// Duración de cada parada de combustible
    pub fuel_stop_duration_hours: f64,
    /// Velocidad promedio asumida para derivar horas de conducción
    pub average_speed_mph: f64,
    /// Hora nominal de inicio del día de servicio
    pub day_start: NaiveTime,
    /// Duración del bloque de pickup + inspección pre-viaje
    pub pickup_duration_hours: f64,
    /// Duración del bloque de dropoff + inspección post-viaje
    pub dropoff_duration_hours: f64,
}

impl Default for HosPolicy {
    fn default() -> Self {
        Self {
            max_driving_hours: 11.0,
            max_on_duty_hours: 14.0,
            min_off_duty_hours: 10.0,
            max_cycle_hours: 70.0,
            break_required_after_hours: 8.0,
            rest_required_after_hours: 11.0,
            break_duration_hours: 0.5,
            sleeper_rest_duration_hours: 10.0,
            fuel_stop_interval_miles: 1000.0,
            fuel_stop_duration_hours: 0.5,
            average_speed_mph: 60.0,
            day_start: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            pickup_duration_hours: 1.0,
            dropoff_duration_hours: 1.0,
        }
    }
}

impl HosPolicy {
    /// Cargar la política desde variables de entorno, con los valores
    /// regulatorios de EE.UU. como defaults
    pub fn from_env() -> Self {
        let mut policy = Self::default();
        policy.max_driving_hours = env_f64("HOS_MAX_DRIVING_HOURS", policy.max_driving_hours);
        policy.max_on_duty_hours = env_f64("HOS_MAX_ON_DUTY_HOURS", policy.max_on_duty_hours);
        policy.min_off_duty_hours = env_f64("HOS_MIN_OFF_DUTY_HOURS", policy.min_off_duty_hours);
        policy.max_cycle_hours = env_f64("HOS_MAX_CYCLE_HOURS", policy.max_cycle_hours);
        policy.break_required_after_hours =
            env_f64("HOS_BREAK_AFTER_HOURS", policy.break_required_after_hours);
        policy.rest_required_after_hours =
            env_f64("HOS_REST_AFTER_HOURS", policy.rest_required_after_hours);
        policy.fuel_stop_interval_miles =
            env_f64("HOS_FUEL_EVERY_MILES", policy.fuel_stop_interval_miles);
        policy.average_speed_mph = env_f64("HOS_AVERAGE_SPEED_MPH", policy.average_speed_mph);
        policy
    }
}

fn env_f64(name: &str, default: f64) -> f64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
