pub mod log_dto;
pub mod trip_dto;
