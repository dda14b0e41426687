use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::model::CatalogItem;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::value_objects::Gender;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::outfit::errors::OutfitError;
use crate::domain::outfit::model::{Outfit, OutfitRole};
use crate::domain::outfit::narrative;
use crate::domain::outfit::queries::{cascade_queries, category_query};
use crate::domain::outfit::ranking::RankingContext;
use crate::domain::outfit::rules::{OutfitRules, RoleSlot};
use crate::domain::outfit::selection::{Pick, SelectionState};
use crate::domain::outfit::use_cases::generate::{GenerateOutfitParams, GenerateOutfitUseCase};
use crate::domain::shared::value_objects::ItemId;

pub struct GenerateOutfitUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub rules: Arc<OutfitRules>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GenerateOutfitUseCase for GenerateOutfitUseCaseImpl {
    async fn execute(&self, params: GenerateOutfitParams) -> Result<Outfit, OutfitError> {
        self.logger.info(&format!(
            "Generating outfit for base item: {}",
            params.base_item_id
        ));

        let base = self
            .repository
            .get_by_id(&params.base_item_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OutfitError::BaseItemNotFound,
                other => self.unavailable(other),
            })?;

        let gender = validate_base(&base)?;

        let preferences = params.preferences;
        if preferences.gender.is_some() || !preferences.avoid_colors.is_empty() {
            self.logger
                .debug("Gender override and avoid-colors are accepted but not applied");
        }

        let Some(plan) = self.rules.plan_for(gender, &base) else {
            self.logger.warn(&format!(
                "No outfit plan for {} / {}",
                gender, base.category
            ));
            return Ok(narrative::unsupported(base));
        };

        let style = preferences
            .style_vibe
            .as_deref()
            .and_then(|vibe| self.rules.style_preference(vibe));
        let ctx = RankingContext {
            palette: &self.rules.palette,
            base_color: base.color_label(),
            style,
        };

        let mut state = SelectionState::new();
        let mut picks = Vec::new();

        for slot in plan {
            if picks.len() >= self.rules.max_items {
                break;
            }

            let pick = match slot.role {
                OutfitRole::Accessory => {
                    self.pick_accessory(base.id, gender, &ctx, &state).await?
                }
                _ => self.pick_for_slot(slot, base.id, gender, &ctx, &state).await?,
            };

            match pick {
                Some(pick) => {
                    self.logger.debug(&format!(
                        "Picked {} for role {}",
                        pick.item.id, pick.role
                    ));
                    state.record(&pick.item);
                    picks.push(pick);
                }
                None => self
                    .logger
                    .debug(&format!("No candidate found for role {}", slot.role)),
            }
        }

        self.logger.info(&format!(
            "Generated outfit with {} items for base item {}",
            picks.len(),
            base.id
        ));

        Ok(narrative::compose(
            base,
            picks,
            &self.rules.palette,
            style.as_ref(),
        ))
    }
}

impl GenerateOutfitUseCaseImpl {
    fn unavailable(&self, error: RepositoryError) -> OutfitError {
        self.logger
            .error(&format!("Catalog read failed: {}", error));
        OutfitError::RecommendationUnavailable
    }

    async fn pick_for_slot(
        &self,
        slot: &RoleSlot,
        base_id: ItemId,
        gender: Gender,
        ctx: &RankingContext<'_>,
        state: &SelectionState,
    ) -> Result<Option<Pick>, OutfitError> {
        if slot.categories.is_empty() {
            return Ok(None);
        }

        let query = category_query(slot, base_id, gender);
        let candidates = self
            .repository
            .find_candidates(&query)
            .await
            .map_err(|e| self.unavailable(e))?;

        let best = ctx.pick_best(state.admissible(&query, &candidates));
        Ok(best.map(|ranked| Pick::from_ranked(slot.role, ranked)))
    }

    /// Walks the keyword groups in priority order and stops at the first
    /// group with an admissible candidate.
    async fn pick_accessory(
        &self,
        base_id: ItemId,
        gender: Gender,
        ctx: &RankingContext<'_>,
        state: &SelectionState,
    ) -> Result<Option<Pick>, OutfitError> {
        let groups = self.rules.accessory_priorities(gender);

        for (priority, query) in cascade_queries(groups, base_id, gender).enumerate() {
            let candidates = self
                .repository
                .find_candidates(&query)
                .await
                .map_err(|e| self.unavailable(e))?;

            if let Some(ranked) = ctx.pick_best(state.admissible(&query, &candidates)) {
                self.logger.debug(&format!(
                    "Accessory matched priority group {}",
                    priority + 1
                ));
                return Ok(Some(Pick::from_ranked(OutfitRole::Accessory, ranked)));
            }
        }

        Ok(None)
    }
}

fn validate_base(base: &CatalogItem) -> Result<Gender, OutfitError> {
    let gender = base.gender.ok_or(OutfitError::UnsupportedGender)?;

    if !base.is_fashion() {
        return Err(OutfitError::NotFashionItem);
    }

    if !base.has_category() {
        return Err(OutfitError::MissingCategory);
    }

    Ok(gender)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::CatalogItemProps;
    use crate::domain::catalog::repository::{CandidateMatcher, CandidateQuery};
    use crate::domain::outfit::model::OutfitPreferences;
    use crate::domain::outfit::rules::CategoryPlan;
    use mockall::mock;
    use proptest::prelude::*;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use uuid::Uuid;

    mock! {
        pub CatalogRepo {}

        #[async_trait]
        impl CatalogRepository for CatalogRepo {
            async fn get_by_id(&self, id: &ItemId) -> Result<CatalogItem, RepositoryError>;
            async fn find_candidates(
                &self,
                query: &CandidateQuery,
            ) -> Result<Vec<CatalogItem>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    struct Fixture<'a> {
        n: u128,
        gender: &'a str,
        name: &'a str,
        category: &'a str,
        color: &'a str,
        price: Option<i64>,
        rating: Option<f64>,
    }

    fn catalog_item(fixture: Fixture<'_>) -> CatalogItem {
        let master = match fixture.category {
            "Casual Shoes" | "Formal Shoes" | "Heels" | "Flats" | "Sandals" => "Footwear",
            "Watches" | "Belts" | "Earrings" | "Handbags" | "Wallets" => "Accessories",
            _ => "Apparel",
        };
        CatalogItem::from_repository(CatalogItemProps {
            id: ItemId::new(Uuid::from_u128(fixture.n)),
            gender: fixture.gender.to_string(),
            name: fixture.name.to_string(),
            category: fixture.category.to_string(),
            sub_category: String::new(),
            master_category: master.to_string(),
            color_name: Some(fixture.color.to_string()),
            color_hex: None,
            price: fixture.price,
            rating: fixture.rating,
            is_available: true,
        })
    }

    fn simple(n: u128, gender: &str, category: &str, color: &str) -> CatalogItem {
        catalog_item(Fixture {
            n,
            gender,
            name: category,
            category,
            color,
            price: Some(2_000),
            rating: Some(4.0),
        })
    }

    /// Repository backed by a fixed snapshot; records every query it serves.
    fn snapshot_repo(
        catalog: Vec<CatalogItem>,
        seen: Arc<Mutex<Vec<CandidateQuery>>>,
    ) -> MockCatalogRepo {
        let mut repo = MockCatalogRepo::new();
        let by_id = catalog.clone();
        repo.expect_get_by_id().returning(move |id| {
            by_id
                .iter()
                .find(|item| item.id == *id)
                .cloned()
                .ok_or(RepositoryError::NotFound)
        });
        repo.expect_find_candidates().returning(move |query| {
            seen.lock().unwrap().push(query.clone());
            Ok(catalog
                .iter()
                .filter(|item| query.matches(item))
                .cloned()
                .collect())
        });
        repo
    }

    fn use_case(repo: MockCatalogRepo, rules: OutfitRules) -> GenerateOutfitUseCaseImpl {
        GenerateOutfitUseCaseImpl {
            repository: Arc::new(repo),
            rules: Arc::new(rules),
            logger: mock_logger(),
        }
    }

    fn params(base: &CatalogItem) -> GenerateOutfitParams {
        GenerateOutfitParams {
            base_item_id: base.id,
            preferences: OutfitPreferences::default(),
        }
    }

    fn no_queries() -> Arc<Mutex<Vec<CandidateQuery>>> {
        Arc::new(Mutex::new(Vec::new()))
    }

    #[tokio::test]
    async fn should_pick_black_jeans_over_red_jeans_for_white_shirt() {
        let base = simple(1, "Men", "Shirts", "White");
        let catalog = vec![
            base.clone(),
            simple(2, "Men", "Jeans", "Red"),
            simple(3, "Men", "Jeans", "Black"),
        ];
        let sut = use_case(snapshot_repo(catalog, no_queries()), OutfitRules::default());

        let outfit = sut.execute(params(&base)).await.unwrap();

        let bottom = outfit
            .items
            .iter()
            .find(|i| i.role == OutfitRole::Bottom)
            .unwrap();
        assert_eq!(bottom.product.id, ItemId::new(Uuid::from_u128(3)));
        assert_eq!(bottom.color_suggestion.as_deref(), Some("Black"));
    }

    #[tokio::test]
    async fn should_fill_at_most_footwear_and_accessory_for_dresses() {
        let base = simple(1, "Women", "Dresses", "Red");
        let catalog = vec![
            base.clone(),
            simple(2, "Women", "Heels", "Black"),
            simple(3, "Women", "Earrings", "Gold"),
            simple(4, "Women", "Jeans", "Blue"),
            simple(5, "Women", "Tops", "White"),
        ];
        let sut = use_case(snapshot_repo(catalog, no_queries()), OutfitRules::default());

        let outfit = sut.execute(params(&base)).await.unwrap();

        let roles: Vec<_> = outfit.items.iter().map(|i| i.role).collect();
        assert_eq!(roles, vec![OutfitRole::Footwear, OutfitRole::Accessory]);
    }

    #[tokio::test]
    async fn should_return_watch_and_never_query_belts_for_men() {
        let base = simple(1, "Men", "Tshirts", "Navy");
        let watch = catalog_item(Fixture {
            n: 2,
            gender: "Men",
            name: "Analog Watch",
            category: "Watches",
            color: "Silver",
            price: Some(9_999),
            rating: Some(2.0),
        });
        let belt = catalog_item(Fixture {
            n: 3,
            gender: "Men",
            name: "Leather Belt",
            category: "Belts",
            color: "Black",
            price: Some(100),
            rating: Some(5.0),
        });
        let seen = no_queries();
        let catalog = vec![base.clone(), watch.clone(), belt];
        let sut = use_case(snapshot_repo(catalog, seen.clone()), OutfitRules::default());

        let outfit = sut.execute(params(&base)).await.unwrap();

        let accessory = outfit
            .items
            .iter()
            .find(|i| i.role == OutfitRole::Accessory)
            .unwrap();
        assert_eq!(accessory.product.id, watch.id);

        let belt_queries = seen
            .lock()
            .unwrap()
            .iter()
            .filter(|q| q.matcher == CandidateMatcher::Keywords(vec!["belt".to_string()]))
            .count();
        assert_eq!(belt_queries, 0);
    }

    #[tokio::test]
    async fn should_return_empty_outfit_with_expansion_message_when_no_plan() {
        let base = simple(1, "Men", "Swimwear", "Blue");
        let mut repo = MockCatalogRepo::new();
        let stored = base.clone();
        repo.expect_get_by_id()
            .returning(move |_| Ok(stored.clone()));
        repo.expect_find_candidates().never();
        let sut = use_case(repo, OutfitRules::default());

        let outfit = sut.execute(params(&base)).await.unwrap();

        assert!(outfit.items.is_empty());
        assert_eq!(
            outfit.explanation,
            "We're still expanding our outfit ideas for swimwear. Check back soon for styling suggestions."
        );
    }

    #[tokio::test]
    async fn should_fail_with_not_found_for_unknown_base() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        let sut = use_case(repo, OutfitRules::default());

        let result = sut
            .execute(GenerateOutfitParams {
                base_item_id: ItemId::new(Uuid::new_v4()),
                preferences: OutfitPreferences::default(),
            })
            .await;

        assert!(matches!(result, Err(OutfitError::BaseItemNotFound)));
    }

    #[tokio::test]
    async fn should_reject_base_with_unsupported_gender() {
        let base = simple(1, "Unisex", "Shirts", "White");
        let sut = use_case(
            snapshot_repo(vec![base.clone()], no_queries()),
            OutfitRules::default(),
        );

        let result = sut.execute(params(&base)).await;

        assert!(matches!(result, Err(OutfitError::UnsupportedGender)));
    }

    #[tokio::test]
    async fn should_reject_non_fashion_base() {
        let mut base = simple(1, "Women", "Perfume and Body Mist", "Pink");
        base.master_category = "Personal Care".to_string();
        let sut = use_case(
            snapshot_repo(vec![base.clone()], no_queries()),
            OutfitRules::default(),
        );

        let result = sut.execute(params(&base)).await;

        assert!(matches!(result, Err(OutfitError::NotFashionItem)));
    }

    #[tokio::test]
    async fn should_reject_base_without_category() {
        let mut base = simple(1, "Men", "", "White");
        base.sub_category = String::new();
        let sut = use_case(
            snapshot_repo(vec![base.clone()], no_queries()),
            OutfitRules::default(),
        );

        let result = sut.execute(params(&base)).await;

        assert!(matches!(result, Err(OutfitError::MissingCategory)));
    }

    #[tokio::test]
    async fn should_fail_whole_request_when_catalog_read_fails_mid_selection() {
        let base = simple(1, "Men", "Shirts", "White");
        let stored = base.clone();
        let mut repo = MockCatalogRepo::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(stored.clone()));
        let mut calls = 0;
        repo.expect_find_candidates().returning(move |_| {
            calls += 1;
            if calls == 1 {
                Ok(vec![simple(2, "Men", "Jeans", "Black")])
            } else {
                Err(RepositoryError::DatabaseError)
            }
        });
        let sut = use_case(repo, OutfitRules::default());

        let result = sut.execute(params(&base)).await;

        assert!(matches!(
            result,
            Err(OutfitError::RecommendationUnavailable)
        ));
    }

    #[tokio::test]
    async fn should_report_unavailable_when_base_lookup_fails() {
        let mut repo = MockCatalogRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));
        let sut = use_case(repo, OutfitRules::default());

        let result = sut
            .execute(GenerateOutfitParams {
                base_item_id: ItemId::new(Uuid::new_v4()),
                preferences: OutfitPreferences::default(),
            })
            .await;

        assert!(matches!(
            result,
            Err(OutfitError::RecommendationUnavailable)
        ));
    }

    #[tokio::test]
    async fn should_not_reuse_a_category_across_roles() {
        let mut rules = OutfitRules::default();
        rules.men.plans = vec![CategoryPlan {
            base_categories: vec!["Shirts".to_string()],
            slots: vec![
                RoleSlot {
                    role: OutfitRole::Top,
                    categories: vec!["Watches".to_string()],
                },
                RoleSlot {
                    role: OutfitRole::Accessory,
                    categories: vec![],
                },
            ],
        }];
        let base = simple(1, "Men", "Shirts", "White");
        let catalog = vec![
            base.clone(),
            simple(2, "Men", "Watches", "Black"),
            simple(3, "Men", "Watches", "Silver"),
            simple(4, "Men", "Belts", "Brown"),
        ];
        let sut = use_case(snapshot_repo(catalog, no_queries()), rules);

        let outfit = sut.execute(params(&base)).await.unwrap();

        let categories: Vec<_> = outfit
            .items
            .iter()
            .map(|i| i.suggested_type.as_str())
            .collect();
        assert_eq!(categories, vec!["Watches", "Belts"]);
    }

    #[tokio::test]
    async fn should_stop_after_max_items() {
        let mut rules = OutfitRules::default();
        rules.men.plans[0].slots.push(RoleSlot {
            role: OutfitRole::Top,
            categories: vec!["Jackets".to_string()],
        });
        let base = simple(1, "Men", "Shirts", "White");
        let catalog = vec![
            base.clone(),
            simple(2, "Men", "Jeans", "Black"),
            simple(3, "Men", "Casual Shoes", "Black"),
            simple(4, "Men", "Watches", "Black"),
            simple(5, "Men", "Jackets", "Black"),
        ];
        let seen = no_queries();
        let sut = use_case(snapshot_repo(catalog, seen.clone()), rules);

        let outfit = sut.execute(params(&base)).await.unwrap();

        assert_eq!(outfit.items.len(), 3);
        assert!(outfit.items.iter().all(|i| i.role != OutfitRole::Top));
        assert!(seen.lock().unwrap().iter().all(|q| {
            q.matcher != CandidateMatcher::Categories(vec!["Jackets".to_string()])
        }));
    }

    #[tokio::test]
    async fn should_use_style_vibe_to_break_color_ties() {
        let base = simple(1, "Men", "Shirts", "White");
        let catalog = vec![
            base.clone(),
            simple(2, "Men", "Trousers", "Blue"),
            simple(3, "Men", "Track Pants", "Blue"),
        ];
        let sut = use_case(snapshot_repo(catalog, no_queries()), OutfitRules::default());

        let outfit = sut
            .execute(GenerateOutfitParams {
                base_item_id: base.id,
                preferences: OutfitPreferences {
                    style_vibe: Some("Sporty".to_string()),
                    gender: None,
                    avoid_colors: vec!["Blue".to_string()],
                },
            })
            .await
            .unwrap();

        assert_eq!(outfit.title, "Sporty look with your Shirts");
        assert_eq!(outfit.items[0].suggested_type, "Track Pants");
    }

    #[tokio::test]
    async fn should_ignore_unknown_style_vibe() {
        let base = simple(1, "Men", "Shirts", "White");
        let sut = use_case(
            snapshot_repo(vec![base.clone()], no_queries()),
            OutfitRules::default(),
        );

        let outfit = sut
            .execute(GenerateOutfitParams {
                base_item_id: base.id,
                preferences: OutfitPreferences {
                    style_vibe: Some("cottagecore".to_string()),
                    ..OutfitPreferences::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(outfit.title, "Complete the look with your Shirts");
        assert!(outfit.items.is_empty());
    }

    #[tokio::test]
    async fn should_skip_slot_without_categories() {
        let mut rules = OutfitRules::default();
        rules.men.plans = vec![CategoryPlan {
            base_categories: vec!["Shirts".to_string()],
            slots: vec![RoleSlot {
                role: OutfitRole::Bottom,
                categories: vec![],
            }],
        }];
        let base = simple(1, "Men", "Shirts", "White");
        let stored = base.clone();
        let mut repo = MockCatalogRepo::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(stored.clone()));
        repo.expect_find_candidates().never();
        let sut = use_case(repo, rules);

        let outfit = sut.execute(params(&base)).await.unwrap();

        assert!(outfit.items.is_empty());
    }

    const CATEGORIES: [&str; 8] = [
        "Jeans",
        "Trousers",
        "Casual Shoes",
        "Sneakers",
        "Watches",
        "Belts",
        "Wallets",
        "Shirts",
    ];
    const COLORS: [&str; 6] = ["Black", "White", "Red", "Blue", "Orange", "Green"];
    const GENDERS: [&str; 3] = ["Men", "Women", "Kids"];

    fn random_item() -> impl Strategy<Value = (usize, usize, usize, Option<i64>, Option<u8>, bool)> {
        (
            0..CATEGORIES.len(),
            0..COLORS.len(),
            0..GENDERS.len(),
            prop::option::of(0i64..10_000),
            prop::option::of(0u8..=50),
            any::<bool>(),
        )
    }

    fn build_catalog(
        raw: &[(usize, usize, usize, Option<i64>, Option<u8>, bool)],
    ) -> (CatalogItem, Vec<CatalogItem>) {
        let base = simple(0, "Men", "Shirts", "White");
        let mut catalog = vec![base.clone()];
        for (index, (category, color, gender, price, rating, available)) in raw.iter().enumerate() {
            let mut item = catalog_item(Fixture {
                n: index as u128 + 1,
                gender: GENDERS[*gender],
                name: CATEGORIES[*category],
                category: CATEGORIES[*category],
                color: COLORS[*color],
                price: *price,
                rating: rating.map(|r| f64::from(r) / 10.0),
            });
            item.is_available = *available;
            catalog.push(item);
        }
        (base, catalog)
    }

    fn run(catalog: Vec<CatalogItem>, base: &CatalogItem) -> Outfit {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let sut = use_case(snapshot_repo(catalog, no_queries()), OutfitRules::default());
        runtime.block_on(sut.execute(params(base))).unwrap()
    }

    proptest! {
        #[test]
        fn outfit_constraints_hold_for_any_catalog(raw in prop::collection::vec(random_item(), 0..25)) {
            let (base, catalog) = build_catalog(&raw);

            let outfit = run(catalog.clone(), &base);

            prop_assert!(outfit.items.len() <= 3);

            let categories: HashSet<_> = outfit
                .items
                .iter()
                .map(|i| i.product.normalized_category())
                .collect();
            prop_assert_eq!(categories.len(), outfit.items.len());

            prop_assert!(outfit.items.iter().all(|i| i.product.id != base.id));
            prop_assert!(outfit.items.iter().all(|i| i.product.is_available));
            prop_assert!(outfit.items.iter().all(|i| i.product.gender == Some(Gender::Men)));

            let again = run(catalog, &base);
            prop_assert_eq!(outfit, again);
        }
    }
}
