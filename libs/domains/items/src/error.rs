use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

pub const ITEM_NOT_FOUND: &str = "Item not found";

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item not found")]
    NotFound,

    /// The backing file is missing, unreadable, unwritable or not valid JSON.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Every `u64` id is taken, so no new id can be assigned.
    #[error("No item id available")]
    IdSpaceExhausted,
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound => AppError::NotFound(ITEM_NOT_FOUND.to_string()),
            ItemError::Storage(detail) => AppError::Storage(detail),
            exhausted @ ItemError::IdSpaceExhausted => {
                AppError::InternalServerError(exhausted.to_string())
            }
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ItemError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_storage_maps_to_500() {
        let response = ItemError::Storage("items.json: No such file".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_id_exhaustion_maps_to_500() {
        let response = ItemError::IdSpaceExhausted.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
