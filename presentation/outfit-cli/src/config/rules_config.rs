use anyhow::Context;
use business::domain::outfit::rules::OutfitRules;
use std::{env, fs, path::Path};

/// Load the outfit rule tables
///
/// Environment variables:
/// - OUTFIT_RULES_PATH: JSON file overriding the built-in tables (optional)
pub fn load_rules() -> anyhow::Result<OutfitRules> {
    match env::var("OUTFIT_RULES_PATH") {
        Ok(path) if !path.trim().is_empty() => load_rules_file(Path::new(path.trim())),
        _ => {
            tracing::info!("Using built-in outfit rules");
            Ok(OutfitRules::default())
        }
    }
}

pub fn load_rules_file(path: &Path) -> anyhow::Result<OutfitRules> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read outfit rules from {}", path.display()))?;
    let rules = OutfitRules::from_json(&json)
        .with_context(|| format!("Invalid outfit rules in {}", path.display()))?;

    tracing::info!(path = %path.display(), "Loaded outfit rules");
    Ok(rules)
}
