use crate::model::{
    id::{UserId, WishlistId},
    wishlist::{
        event::{
            CreateWishlist, DeleteWishlist, RenameWishlist, ToggleWishlistExperience,
            ToggleWishlistRoom,
        },
        Wishlist,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait WishlistRepository: Send + Sync {
    async fn create(&self, event: CreateWishlist) -> AppResult<Wishlist>;
    async fn find_for_user(&self, user_id: UserId) -> AppResult<Vec<Wishlist>>;
    async fn find_by_id(&self, wishlist_id: WishlistId) -> AppResult<Option<Wishlist>>;
    async fn rename(&self, event: RenameWishlist) -> AppResult<Wishlist>;
    async fn delete(&self, event: DeleteWishlist) -> AppResult<()>;
    /// Adds the room when absent, removes it when present. Returns whether
    /// the room is saved after the call.
    async fn toggle_room(&self, event: ToggleWishlistRoom) -> AppResult<bool>;
    async fn toggle_experience(&self, event: ToggleWishlistExperience) -> AppResult<bool>;
}
