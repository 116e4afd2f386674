pub mod log_repository;
pub mod route_repository;
pub mod trip_repository;
