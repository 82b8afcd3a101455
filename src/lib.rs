pub mod aggregator;
pub mod api;
pub mod app;
pub mod config;
pub mod importers;
pub mod map;
pub mod models;
pub mod palette;
pub mod services;
pub mod utils;
