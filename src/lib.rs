//! HOS Trip Planner
//!
//! Backend de planificación de trips con cálculo de logs diarios
//! Hours-of-Service: estimado de ruta con paradas derivadas, división
//! multi-día y grid horario de actividades.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
