pub mod log_routes;
pub mod trip_routes;
