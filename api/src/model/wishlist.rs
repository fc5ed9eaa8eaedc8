use garde::Validate;
use kernel::model::{
    id::{ExperienceId, RoomId, UserId, WishlistId},
    wishlist::Wishlist,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWishlistRequest {
    #[garde(length(min = 1))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RenameWishlistRequest {
    #[garde(length(min = 1))]
    pub name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistsResponse {
    pub items: Vec<WishlistResponse>,
}

impl From<Vec<Wishlist>> for WishlistsResponse {
    fn from(value: Vec<Wishlist>) -> Self {
        Self {
            items: value.into_iter().map(WishlistResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistResponse {
    pub wishlist_id: WishlistId,
    pub user_id: UserId,
    pub name: String,
    pub rooms: Vec<RoomId>,
    pub experiences: Vec<ExperienceId>,
}

impl From<Wishlist> for WishlistResponse {
    fn from(value: Wishlist) -> Self {
        let Wishlist {
            wishlist_id,
            user_id,
            name,
            rooms,
            experiences,
        } = value;
        Self {
            wishlist_id,
            user_id,
            name,
            rooms,
            experiences,
        }
    }
}

/// Result of a toggle; `saved` is the state after the call.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    pub saved: bool,
}
