use business::domain::outfit::errors::OutfitError;
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

/// Maps a domain error to the printed body and process exit code.
pub trait IntoErrorResponse {
    fn into_error_response(self) -> (u8, ErrorResponse);
}

const EXIT_UNAVAILABLE: u8 = 1;
const EXIT_VALIDATION: u8 = 2;

impl IntoErrorResponse for OutfitError {
    fn into_error_response(self) -> (u8, ErrorResponse) {
        let (exit_code, name) = match &self {
            OutfitError::BaseItemNotFound => (EXIT_VALIDATION, "NotFound"),
            OutfitError::InvalidItemId
            | OutfitError::UnsupportedGender
            | OutfitError::NotFashionItem
            | OutfitError::MissingCategory => (EXIT_VALIDATION, "ValidationError"),
            OutfitError::RecommendationUnavailable => (EXIT_UNAVAILABLE, "UnavailableError"),
        };

        (
            exit_code,
            ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_validation_errors_to_exit_code_two() {
        for error in [
            OutfitError::InvalidItemId,
            OutfitError::UnsupportedGender,
            OutfitError::NotFashionItem,
            OutfitError::MissingCategory,
        ] {
            let message = error.to_string();
            let (code, response) = error.into_error_response();
            assert_eq!(code, 2);
            assert_eq!(response.name, "ValidationError");
            assert_eq!(response.message, message);
        }
    }

    #[test]
    fn should_map_not_found() {
        let (code, response) = OutfitError::BaseItemNotFound.into_error_response();
        assert_eq!(code, 2);
        assert_eq!(response.name, "NotFound");
        assert_eq!(response.message, "outfit.base_item_not_found");
    }

    #[test]
    fn should_map_unavailable_to_exit_code_one() {
        let (code, response) = OutfitError::RecommendationUnavailable.into_error_response();
        assert_eq!(code, 1);
        assert_eq!(response.name, "UnavailableError");
        assert_eq!(response.message, "outfit.recommendation_unavailable");
    }
}
