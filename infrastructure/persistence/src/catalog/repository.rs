use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::catalog::model::CatalogItem;
use business::domain::catalog::repository::{CandidateMatcher, CandidateQuery, CatalogRepository};
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::ItemId;

use super::entity::CatalogItemEntity;

const SELECT_COLUMNS: &str = "SELECT id, gender, name, category, sub_category, master_category, color_name, color_hex, price, rating, is_available FROM catalog_items";

const CATEGORY_FILTER: &str = "(lower(btrim(category)) = ANY($3) OR lower(btrim(sub_category)) = ANY($3) OR lower(btrim(master_category)) = ANY($3))";

const KEYWORD_FILTER: &str = r#"EXISTS (
    SELECT 1 FROM unnest($3::text[]) AS kw(word)
    WHERE strpos(lower(name), kw.word) > 0
       OR strpos(lower(category), kw.word) > 0
       OR strpos(lower(sub_category), kw.word) > 0
       OR strpos(lower(master_category), kw.word) > 0
)"#;

pub struct CatalogRepositoryPostgres {
    pool: PgPool,
}

impl CatalogRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Builds the candidate SQL. Ordered by id so repeated reads of the same
/// snapshot come back identical.
fn candidate_sql(matcher: &CandidateMatcher) -> String {
    let filter = match matcher {
        CandidateMatcher::Categories(_) => CATEGORY_FILTER,
        CandidateMatcher::Keywords(_) => KEYWORD_FILTER,
    };
    format!(
        "{} WHERE id <> $1 AND is_available AND lower(btrim(gender)) = ANY($2) AND {} ORDER BY id",
        SELECT_COLUMNS, filter
    )
}

/// Lowercased, trimmed, non-blank labels bound as the `$3` array.
fn matcher_labels(matcher: &CandidateMatcher) -> Vec<String> {
    let labels = match matcher {
        CandidateMatcher::Categories(labels) | CandidateMatcher::Keywords(labels) => labels,
    };
    labels
        .iter()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect()
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryPostgres {
    async fn get_by_id(&self, id: &ItemId) -> Result<CatalogItem, RepositoryError> {
        let entity = sqlx::query_as::<_, CatalogItemEntity>(&format!(
            "{} WHERE id = $1",
            SELECT_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load catalog item {}: {}", id, e);
            RepositoryError::DatabaseError
        })?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find_candidates(
        &self,
        query: &CandidateQuery,
    ) -> Result<Vec<CatalogItem>, RepositoryError> {
        let labels = matcher_labels(&query.matcher);
        if labels.is_empty() {
            return Ok(vec![]);
        }

        let genders: Vec<String> = query
            .gender
            .aliases()
            .iter()
            .map(|g| g.to_string())
            .collect();

        let entities = sqlx::query_as::<_, CatalogItemEntity>(&candidate_sql(&query.matcher))
            .bind(query.exclude_id.as_uuid())
            .bind(genders)
            .bind(labels)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Candidate query failed: {}", e);
                RepositoryError::DatabaseError
            })?;

        tracing::debug!(count = entities.len(), "Fetched outfit candidates");
        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
