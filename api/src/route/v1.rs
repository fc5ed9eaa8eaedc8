use super::{
    auth::build_auth_routers, booking::build_booking_routers, category::build_category_routers,
    experience::build_experience_routers, health::build_health_check_routers,
    message::build_message_routers, room::build_room_routers, user::build_user_routers,
    wishlist::build_wishlist_routers,
};
use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_auth_routers())
        .merge(build_user_routers())
        .merge(build_category_routers())
        .merge(build_room_routers())
        .merge(build_experience_routers())
        .merge(build_booking_routers())
        .merge(build_message_routers())
        .merge(build_wishlist_routers());
    Router::new().nest("/api/v1", router)
}
