pub mod app_config;
pub mod database_config;
pub mod rules_config;
