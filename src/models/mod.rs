//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL, más los value objects puros del cálculo HOS.

pub mod activity_period;
pub mod log_entry;
pub mod route;
pub mod trip;
