use std::sync::Arc;

use business::domain::outfit::rules::OutfitRules;

use super::{database_config::DatabaseSettings, rules_config};

pub struct AppConfig {
    pub database: DatabaseSettings,
    pub rules: Arc<OutfitRules>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database: DatabaseSettings::from_env()?,
            rules: Arc::new(rules_config::load_rules()?),
        })
    }
}
