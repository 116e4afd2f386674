//! Configuración del proyecto
//!
//! Este módulo contiene la configuración de variables de entorno
//! y la política HOS inyectable.

pub mod environment;
pub mod hos_policy;

pub use environment::*;
pub use hos_policy::*;
