use sqlx::FromRow;
use uuid::Uuid;

use business::domain::catalog::model::{CatalogItem, CatalogItemProps};
use business::domain::shared::value_objects::ItemId;

#[derive(Debug, FromRow)]
pub struct CatalogItemEntity {
    pub id: Uuid,
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

impl CatalogItemEntity {
    pub fn into_domain(self) -> CatalogItem {
        CatalogItem::from_repository(CatalogItemProps {
            id: ItemId::new(self.id),
            gender: self.gender,
            name: self.name,
            category: self.category,
            sub_category: self.sub_category,
            master_category: self.master_category,
            color_name: self.color_name,
            color_hex: self.color_hex,
            price: self.price,
            rating: self.rating.filter(|r| r.is_finite()),
            is_available: self.is_available,
        })
    }
}
