use super::value_objects::Gender;
use crate::domain::shared::text::normalize;
use crate::domain::shared::value_objects::ItemId;

/// Master categories that belong to the fashion catalog.
const FASHION_MASTER_CATEGORIES: [&str; 3] = ["apparel", "footwear", "accessories"];

/// Read-only snapshot of a catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: ItemId,
    pub gender: Option<Gender>,
    pub name: String,
    /// Article type, e.g. "Jeans" or "Casual Shoes".
    pub category: String,
    /// Grouping above the article type, e.g. "Bottomwear".
    pub sub_category: String,
    /// Top-level grouping, e.g. "Apparel".
    pub master_category: String,
    pub color_name: Option<String>,
    pub color_hex: Option<String>,
    /// Price in minor currency units.
    pub price: Option<i64>,
    pub rating: Option<f64>,
    pub is_available: bool,
}

/// Raw values as stored in the catalog.
pub struct CatalogItemProps {
    pub id: ItemId,
    pub gender: String,
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

impl CatalogItem {
    /// Constructor for data already persisted in the repository.
    ///
    /// Unknown genders become `None` instead of failing, so the item can
    /// still be loaded and rejected later with a proper validation error.
    pub fn from_repository(props: CatalogItemProps) -> Self {
        Self {
            id: props.id,
            gender: props.gender.parse::<Gender>().ok(),
            name: props.name.trim().to_string(),
            category: props.category.trim().to_string(),
            sub_category: props.sub_category.trim().to_string(),
            master_category: props.master_category.trim().to_string(),
            color_name: non_blank(props.color_name),
            color_hex: non_blank(props.color_hex),
            price: props.price,
            rating: props.rating,
            is_available: props.is_available,
        }
    }

    /// Category used for duplicate detection across outfit roles.
    pub fn normalized_category(&self) -> String {
        if self.category.trim().is_empty() {
            normalize(&self.sub_category)
        } else {
            normalize(&self.category)
        }
    }

    pub fn has_category(&self) -> bool {
        !self.category.trim().is_empty() || !self.sub_category.trim().is_empty()
    }

    /// Items without a master category are assumed to be fashion.
    pub fn is_fashion(&self) -> bool {
        let master = normalize(&self.master_category);
        master.is_empty() || FASHION_MASTER_CATEGORIES.contains(&master.as_str())
    }

    pub fn category_fields(&self) -> [&str; 3] {
        [
            self.category.as_str(),
            self.sub_category.as_str(),
            self.master_category.as_str(),
        ]
    }

    /// Fields scanned by keyword searches.
    pub fn searchable_fields(&self) -> [&str; 4] {
        [
            self.name.as_str(),
            self.category.as_str(),
            self.sub_category.as_str(),
            self.master_category.as_str(),
        ]
    }

    pub fn color_label(&self) -> Option<&str> {
        self.color_name.as_deref()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
