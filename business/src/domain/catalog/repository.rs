use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::text::{contains_keyword, same_label};
use crate::domain::shared::value_objects::ItemId;

use super::model::CatalogItem;
use super::value_objects::Gender;

/// How candidates are matched against an outfit role.
#[derive(Debug, Clone, PartialEq)]
pub enum CandidateMatcher {
    /// Case-insensitive equality against category, sub-category or master-category.
    Categories(Vec<String>),
    /// Case-insensitive substring search over name and the category fields.
    Keywords(Vec<String>),
}

impl CandidateMatcher {
    pub fn matches(&self, item: &CatalogItem) -> bool {
        match self {
            CandidateMatcher::Categories(categories) => item
                .category_fields()
                .iter()
                .any(|field| categories.iter().any(|c| same_label(field, c))),
            CandidateMatcher::Keywords(keywords) => item
                .searchable_fields()
                .iter()
                .any(|field| keywords.iter().any(|k| contains_keyword(field, k))),
        }
    }
}

/// Catalog search for one outfit role.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateQuery {
    pub exclude_id: ItemId,
    pub gender: Gender,
    pub matcher: CandidateMatcher,
}

impl CandidateQuery {
    /// In-memory form of the query. Store adapters must return a subset of
    /// what this accepts: not the excluded item, available, same gender and
    /// a matcher hit.
    pub fn matches(&self, item: &CatalogItem) -> bool {
        item.id != self.exclude_id
            && item.is_available
            && item.gender == Some(self.gender)
            && self.matcher.matches(item)
    }
}

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn get_by_id(&self, id: &ItemId) -> Result<CatalogItem, RepositoryError>;
    async fn find_candidates(
        &self,
        query: &CandidateQuery,
    ) -> Result<Vec<CatalogItem>, RepositoryError>;
}
