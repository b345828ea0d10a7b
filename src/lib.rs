pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod web;

pub use config::AppConfig;
pub use database::{SharedStore, Store};
pub use error::ApiError;
