use crate::{
    extractor::AuthorizedUser,
    model::category::{CategoriesResponse, CategoryResponse, CreateCategoryRequest},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::CategoryId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_category(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateCategoryRequest>,
) -> AppResult<(StatusCode, Json<CategoryResponse>)> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;

    let category = registry.category_repository().create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(category.into())))
}

pub async fn show_category_list(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CategoriesResponse>> {
    registry
        .category_repository()
        .find_all()
        .await
        .map(CategoriesResponse::from)
        .map(Json)
}

pub async fn show_category(
    _user: AuthorizedUser,
    Path(category_id): Path<CategoryId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CategoryResponse>> {
    registry
        .category_repository()
        .find_by_id(category_id)
        .await
        .and_then(|category| match category {
            Some(category) => Ok(Json(category.into())),
            None => Err(AppError::EntityNotFound("not found".into())),
        })
}

pub async fn delete_category(
    user: AuthorizedUser,
    Path(category_id): Path<CategoryId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    registry
        .category_repository()
        .delete(category_id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
}
