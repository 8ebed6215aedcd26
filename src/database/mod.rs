pub mod activity_catalog_repo;
pub mod seed_activities;
