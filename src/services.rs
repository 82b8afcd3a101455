pub mod station_service;

pub use station_service::StationService;
