use kernel::model::id::{UserId, WishlistId};

#[derive(sqlx::FromRow)]
pub struct WishlistRow {
    pub wishlist_id: WishlistId,
    pub user_id: UserId,
    pub name: String,
}
