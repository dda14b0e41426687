use business::domain::outfit::errors::OutfitError;
use business::domain::outfit::model::OutfitPreferences;
use business::domain::outfit::use_cases::generate::{GenerateOutfitParams, GenerateOutfitUseCase};
use business::domain::shared::value_objects::ItemId;

use super::dependency_injection::DependencyContainer;
use crate::cli::OutfitRequest;
use crate::output::dto::OutfitResponse;
use crate::output::error::IntoErrorResponse;

/// What the process prints and how it exits.
pub struct RunResult {
    pub body: serde_json::Value,
    pub exit_code: u8,
}

pub async fn run(container: &DependencyContainer, request: OutfitRequest) -> RunResult {
    generate(container.generate_outfit_use_case.as_ref(), request).await
}

async fn generate(use_case: &dyn GenerateOutfitUseCase, request: OutfitRequest) -> RunResult {
    let result = match request.base_item_id.trim().parse::<ItemId>() {
        Ok(base_item_id) => {
            use_case
                .execute(GenerateOutfitParams {
                    base_item_id,
                    preferences: OutfitPreferences {
                        style_vibe: request.style_vibe,
                        gender: request.gender,
                        avoid_colors: request.avoid_colors,
                    },
                })
                .await
        }
        Err(_) => Err(OutfitError::InvalidItemId),
    };

    match result {
        Ok(outfit) => RunResult {
            body: serde_json::json!(OutfitResponse::from(outfit)),
            exit_code: 0,
        },
        Err(e) => {
            let (exit_code, error) = e.into_error_response();
            RunResult {
                body: serde_json::json!(error),
                exit_code,
            }
        }
    }
}
