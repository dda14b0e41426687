//! Catalog queries issued per outfit role.
//!
//! Accessories use prioritized keyword groups: each group becomes one keyword
//! query, groups are tried in order and the first one with an admissible
//! candidate wins. Later groups are never queried.

use crate::domain::catalog::repository::{CandidateMatcher, CandidateQuery};
use crate::domain::catalog::value_objects::Gender;
use crate::domain::shared::value_objects::ItemId;

use super::rules::RoleSlot;

/// Ordered keyword queries for the accessory role.
pub fn cascade_queries<'a>(
    groups: &'a [Vec<String>],
    exclude_id: ItemId,
    gender: Gender,
) -> impl Iterator<Item = CandidateQuery> + 'a {
    groups.iter().map(move |keywords| CandidateQuery {
        exclude_id,
        gender,
        matcher: CandidateMatcher::Keywords(keywords.clone()),
    })
}

/// Category query for every non-accessory role.
pub fn category_query(slot: &RoleSlot, exclude_id: ItemId, gender: Gender) -> CandidateQuery {
    CandidateQuery {
        exclude_id,
        gender,
        matcher: CandidateMatcher::Categories(slot.categories.clone()),
    }
}
