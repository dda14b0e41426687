use std::sync::Arc;

use business::application::outfit::generate::GenerateOutfitUseCaseImpl;
use business::domain::outfit::rules::OutfitRules;
use business::domain::outfit::use_cases::generate::GenerateOutfitUseCase;
use logger::TracingLogger;
use persistence::catalog::repository::CatalogRepositoryPostgres;

pub struct DependencyContainer {
    pub generate_outfit_use_case: Arc<dyn GenerateOutfitUseCase>,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, rules: Arc<OutfitRules>) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let catalog_repository = Arc::new(CatalogRepositoryPostgres::new(pool));

        let generate_outfit_use_case = Arc::new(GenerateOutfitUseCaseImpl {
            repository: catalog_repository,
            rules,
            logger,
        });

        Self {
            generate_outfit_use_case,
        }
    }
}
