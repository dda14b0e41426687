#[derive(Debug, thiserror::Error)]
pub enum OutfitError {
    #[error("outfit.invalid_item_id")]
    InvalidItemId,
    #[error("outfit.base_item_not_found")]
    BaseItemNotFound,
    #[error("outfit.unsupported_gender")]
    UnsupportedGender,
    #[error("outfit.not_fashion_item")]
    NotFashionItem,
    #[error("outfit.missing_category")]
    MissingCategory,
    #[error("outfit.recommendation_unavailable")]
    RecommendationUnavailable,
}

impl OutfitError {
    /// Caller-correctable input problems. Everything else is transient.
    pub fn is_validation(&self) -> bool {
        !matches!(self, OutfitError::RecommendationUnavailable)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    #[error("rules.invalid_format")]
    InvalidFormat(#[from] serde_json::Error),
    #[error("rules.invalid_max_items")]
    InvalidMaxItems,
    #[error("rules.empty_keyword_group")]
    EmptyKeywordGroup,
}
