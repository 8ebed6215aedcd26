pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod services;
pub mod web;

pub use config::AppConfig;
pub use database::activity_catalog_repo::ActivityCatalog;
pub use error::CatalogError;
pub use services::activities_service::SignupPolicy;
pub use web::{build_router, AppState};
