pub mod log_controller;
pub mod trip_controller;
