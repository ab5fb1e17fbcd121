use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Convert CatalogError to AppError for standardized error responses
impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(id) => {
                tracing::debug!(item_id = %id, "Lookup missed");
                AppError::NotFound("Not found".to_string())
            }
            CatalogError::Validation(msg) => AppError::BadRequest(msg),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
