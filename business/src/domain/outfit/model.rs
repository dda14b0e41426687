use serde::{Deserialize, Serialize};

use crate::domain::catalog::model::CatalogItem;

/// Functional outfit slot filled by one complementary item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutfitRole {
    Top,
    Bottom,
    Footwear,
    Accessory,
}

impl std::fmt::Display for OutfitRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutfitRole::Top => write!(f, "top"),
            OutfitRole::Bottom => write!(f, "bottom"),
            OutfitRole::Footwear => write!(f, "footwear"),
            OutfitRole::Accessory => write!(f, "accessory"),
        }
    }
}

/// Shopper preferences attached to an outfit request.
///
/// `gender` and `avoid_colors` are accepted but do not influence selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutfitPreferences {
    pub style_vibe: Option<String>,
    pub gender: Option<String>,
    pub avoid_colors: Vec<String>,
}

/// One complementary item chosen for a role.
#[derive(Debug, Clone, PartialEq)]
pub struct OutfitItem {
    pub role: OutfitRole,
    pub suggested_type: String,
    pub color_suggestion: Option<String>,
    pub color_hex_suggestion: Option<String>,
    pub reason: String,
    pub product: CatalogItem,
}

/// Outfit built around a base item. `items` may be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Outfit {
    pub base: CatalogItem,
    pub title: String,
    pub items: Vec<OutfitItem>,
    pub explanation: String,
}
