use std::collections::HashSet;

use super::model::OutfitRole;
use super::ranking::{ColorHarmony, RankedCandidate};
use crate::domain::catalog::model::CatalogItem;
use crate::domain::catalog::repository::CandidateQuery;
use crate::domain::shared::value_objects::ItemId;

/// Items and categories already used while building one outfit.
#[derive(Debug, Default)]
pub struct SelectionState {
    chosen_ids: HashSet<ItemId>,
    chosen_categories: HashSet<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn admits(&self, item: &CatalogItem) -> bool {
        !self.chosen_ids.contains(&item.id)
            && !self.chosen_categories.contains(&item.normalized_category())
    }

    pub fn record(&mut self, item: &CatalogItem) {
        self.chosen_ids.insert(item.id);
        self.chosen_categories.insert(item.normalized_category());
    }

    /// Candidates that satisfy the query and are not used yet.
    pub fn admissible<'a>(
        &self,
        query: &CandidateQuery,
        candidates: &'a [CatalogItem],
    ) -> Vec<&'a CatalogItem> {
        candidates
            .iter()
            .filter(|item| query.matches(item) && self.admits(item))
            .collect()
    }
}

/// Winning candidate for one role.
#[derive(Debug, Clone)]
pub struct Pick {
    pub role: OutfitRole,
    pub item: CatalogItem,
    pub harmony: ColorHarmony,
    pub style_weight: usize,
}

impl Pick {
    pub fn from_ranked(role: OutfitRole, ranked: RankedCandidate<'_>) -> Self {
        Self {
            role,
            item: ranked.item.clone(),
            harmony: ranked.harmony,
            style_weight: ranked.style_weight,
        }
    }
}
