use async_trait::async_trait;

use crate::domain::outfit::errors::OutfitError;
use crate::domain::outfit::model::{Outfit, OutfitPreferences};
use crate::domain::shared::value_objects::ItemId;

pub struct GenerateOutfitParams {
    pub base_item_id: ItemId,
    pub preferences: OutfitPreferences,
}

#[async_trait]
pub trait GenerateOutfitUseCase: Send + Sync {
    async fn execute(&self, params: GenerateOutfitParams) -> Result<Outfit, OutfitError>;
}
