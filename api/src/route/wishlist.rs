use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::wishlist::{
    delete_wishlist, register_wishlist, rename_wishlist, show_wishlist, show_wishlist_list,
    toggle_wishlist_experience, toggle_wishlist_room,
};

pub fn build_wishlist_routers() -> Router<AppRegistry> {
    let wishlist_routers = Router::new()
        .route("/", post(register_wishlist))
        .route("/", get(show_wishlist_list))
        .route("/:wishlist_id", get(show_wishlist))
        .route("/:wishlist_id", put(rename_wishlist))
        .route("/:wishlist_id", delete(delete_wishlist))
        .route("/:wishlist_id/rooms/:room_id", put(toggle_wishlist_room))
        .route(
            "/:wishlist_id/experiences/:experience_id",
            put(toggle_wishlist_experience),
        );

    Router::new().nest("/wishlists", wishlist_routers)
}
