//! Services module
//!
//! Este módulo contiene la lógica de negocio del cálculo HOS y la
//! integración con el servicio de rutas externo. El núcleo (scheduler,
//! builder, planner) es puro: recibe value objects y devuelve borradores
//! sin tocar la base de datos.

pub mod activity_scheduler;
pub mod daily_log_builder;
pub mod route_estimator;
pub mod route_planner;
pub mod trip_log_planner;

pub use activity_scheduler::*;
pub use daily_log_builder::*;
pub use route_estimator::*;
pub use route_planner::*;
pub use trip_log_planner::*;
