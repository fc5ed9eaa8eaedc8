use crate::model::id::{ExperienceId, RoomId, UserId, WishlistId};

#[derive(Debug)]
pub struct Wishlist {
    pub wishlist_id: WishlistId,
    pub user_id: UserId,
    pub name: String,
    pub rooms: Vec<RoomId>,
    pub experiences: Vec<ExperienceId>,
}

impl Wishlist {
    pub fn owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

pub mod event {
    use super::*;
    use derive_new::new;

    #[derive(new)]
    pub struct CreateWishlist {
        pub user_id: UserId,
        pub name: String,
    }

    #[derive(new)]
    pub struct RenameWishlist {
        pub wishlist_id: WishlistId,
        pub requested_user: UserId,
        pub name: String,
    }

    #[derive(new)]
    pub struct DeleteWishlist {
        pub wishlist_id: WishlistId,
        pub requested_user: UserId,
    }

    #[derive(new)]
    pub struct ToggleWishlistRoom {
        pub wishlist_id: WishlistId,
        pub requested_user: UserId,
        pub room_id: RoomId,
    }

    #[derive(new)]
    pub struct ToggleWishlistExperience {
        pub wishlist_id: WishlistId,
        pub requested_user: UserId,
        pub experience_id: ExperienceId,
    }
}
