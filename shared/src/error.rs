use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    BookingConflict(String),
    #[error("validation failed: {0}")]
    ValidationError(#[from] garde::Report),
    #[error("failed to run the transaction")]
    TransactionError(#[source] sqlx::Error),
    #[error("failed to run the database query")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("no rows affected: {0}")]
    NoRowsAffectedError(String),
    #[error("{0}")]
    KeyValueStoreError(#[from] redis::RedisError),
    #[error("{0}")]
    BcryptError(#[from] bcrypt::BcryptError),
    #[error("{0}")]
    ConvertToUuidError(#[from] uuid::Error),
    #[error("failed to authenticate")]
    UnauthenticatedError,
    #[error("invalid authorization credentials")]
    UnauthorizedError,
    #[error("the operation is not permitted for this user")]
    ForbiddenOperation,
    #[error("{0}")]
    ConversionEntityError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match &self {
            AppError::UnprocessableEntity(_) | AppError::ValidationError(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::BookingConflict(_) => StatusCode::CONFLICT,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::UnauthenticatedError | AppError::UnauthorizedError => {
                StatusCode::UNAUTHORIZED
            }
            AppError::ForbiddenOperation => StatusCode::FORBIDDEN,
            e @ (AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::KeyValueStoreError(_)
            | AppError::BcryptError(_)
            | AppError::ConvertToUuidError(_)
            | AppError::ConversionEntityError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status_code, self.to_string()).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_and_conflict_map_to_distinct_statuses() {
        let res = AppError::UnprocessableEntity("check_out must be after check_in".into())
            .into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let res = AppError::BookingConflict("those dates are already taken".into())
            .into_response();
        assert_eq!(res.status(), StatusCode::CONFLICT);

        let res = AppError::EntityNotFound("room not found".into()).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn auth_errors_are_terminal_for_the_request() {
        let res = AppError::ForbiddenOperation.into_response();
        assert_eq!(res.status(), StatusCode::FORBIDDEN);

        let res = AppError::UnauthenticatedError.into_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
