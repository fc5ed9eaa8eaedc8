use crate::{
    extractor::AuthorizedUser,
    model::wishlist::{
        CreateWishlistRequest, RenameWishlistRequest, ToggleResponse, WishlistResponse,
        WishlistsResponse,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    id::{ExperienceId, RoomId, WishlistId},
    wishlist::event::{
        CreateWishlist, DeleteWishlist, RenameWishlist, ToggleWishlistExperience,
        ToggleWishlistRoom,
    },
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_wishlist(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateWishlistRequest>,
) -> AppResult<(StatusCode, Json<WishlistResponse>)> {
    req.validate(&())?;

    let wishlist = registry
        .wishlist_repository()
        .create(CreateWishlist::new(user.id(), req.name))
        .await?;
    Ok((StatusCode::CREATED, Json(wishlist.into())))
}

pub async fn show_wishlist_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<WishlistsResponse>> {
    registry
        .wishlist_repository()
        .find_for_user(user.id())
        .await
        .map(WishlistsResponse::from)
        .map(Json)
}

pub async fn show_wishlist(
    user: AuthorizedUser,
    Path(wishlist_id): Path<WishlistId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<WishlistResponse>> {
    let wishlist = registry
        .wishlist_repository()
        .find_by_id(wishlist_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("not found".into()))?;
    if !wishlist.owned_by(user.id()) {
        return Err(AppError::ForbiddenOperation);
    }
    Ok(Json(wishlist.into()))
}

pub async fn rename_wishlist(
    user: AuthorizedUser,
    Path(wishlist_id): Path<WishlistId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<RenameWishlistRequest>,
) -> AppResult<Json<WishlistResponse>> {
    req.validate(&())?;

    let wishlist = registry
        .wishlist_repository()
        .rename(RenameWishlist::new(wishlist_id, user.id(), req.name))
        .await?;
    Ok(Json(wishlist.into()))
}

pub async fn delete_wishlist(
    user: AuthorizedUser,
    Path(wishlist_id): Path<WishlistId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .wishlist_repository()
        .delete(DeleteWishlist::new(wishlist_id, user.id()))
        .await
        .map(|_| StatusCode::NO_CONTENT)
}

pub async fn toggle_wishlist_room(
    user: AuthorizedUser,
    Path((wishlist_id, room_id)): Path<(WishlistId, RoomId)>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ToggleResponse>> {
    let saved = registry
        .wishlist_repository()
        .toggle_room(ToggleWishlistRoom::new(wishlist_id, user.id(), room_id))
        .await?;
    Ok(Json(ToggleResponse { saved }))
}

pub async fn toggle_wishlist_experience(
    user: AuthorizedUser,
    Path((wishlist_id, experience_id)): Path<(WishlistId, ExperienceId)>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ToggleResponse>> {
    let saved = registry
        .wishlist_repository()
        .toggle_experience(ToggleWishlistExperience::new(
            wishlist_id,
            user.id(),
            experience_id,
        ))
        .await?;
    Ok(Json(ToggleResponse { saved }))
}
