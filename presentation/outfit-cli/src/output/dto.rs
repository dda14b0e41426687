use business::domain::catalog::model::CatalogItem;
use business::domain::outfit::model::{Outfit, OutfitItem, OutfitRole};
use serde::Serialize;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemResponse {
    pub id: String,
    pub gender: Option<String>,
    pub name: String,
    pub category: String,
    pub sub_category: String,
    pub master_category: String,
    pub color_name: Option<String>,
    pub color_hex: Option<String>,
    pub price: Option<i64>,
    pub rating: Option<f64>,
    pub is_available: bool,
}

impl From<CatalogItem> for CatalogItemResponse {
    fn from(item: CatalogItem) -> Self {
        Self {
            id: item.id.to_string(),
            gender: item.gender.map(|gender| gender.to_string()),
            name: item.name,
            category: item.category,
            sub_category: item.sub_category,
            master_category: item.master_category,
            color_name: item.color_name,
            color_hex: item.color_hex,
            price: item.price,
            rating: item.rating,
            is_available: item.is_available,
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OutfitItemResponse {
    pub role: OutfitRole,
    pub suggested_type: String,
    pub color_suggestion: Option<String>,
    pub color_hex_suggestion: Option<String>,
    pub reason: String,
    pub product: CatalogItemResponse,
}

impl From<OutfitItem> for OutfitItemResponse {
    fn from(item: OutfitItem) -> Self {
        Self {
            role: item.role,
            suggested_type: item.suggested_type,
            color_suggestion: item.color_suggestion,
            color_hex_suggestion: item.color_hex_suggestion,
            reason: item.reason,
            product: item.product.into(),
        }
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OutfitResponse {
    pub base: CatalogItemResponse,
    pub outfit_title: String,
    pub outfit_items: Vec<OutfitItemResponse>,
    pub overall_style_explanation: String,
}

impl From<Outfit> for OutfitResponse {
    fn from(outfit: Outfit) -> Self {
        Self {
            base: outfit.base.into(),
            outfit_title: outfit.title,
            outfit_items: outfit.items.into_iter().map(Into::into).collect(),
            overall_style_explanation: outfit.explanation,
        }
    }
}
