use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::{
    booking::{
        book_experience, show_experience_booking, show_experience_bookings,
        update_experience_booking,
    },
    experience::{
        delete_experience, delete_perk, register_experience, register_perk, show_experience,
        show_experience_list, show_experience_perks, show_perk_list, update_experience,
    },
    media::{add_experience_photo, add_experience_video},
    review::{review_experience, show_experience_rating, show_experience_reviews},
};

pub fn build_experience_routers() -> Router<AppRegistry> {
    let experience_routers = Router::new()
        .route("/", post(register_experience))
        .route("/", get(show_experience_list))
        .route("/:experience_id", get(show_experience))
        .route("/:experience_id", put(update_experience))
        .route("/:experience_id", delete(delete_experience))
        .route("/:experience_id/perks", get(show_experience_perks))
        .route("/:experience_id/bookings", post(book_experience))
        .route("/:experience_id/bookings", get(show_experience_bookings))
        .route(
            "/:experience_id/bookings/:booking_id",
            get(show_experience_booking),
        )
        .route(
            "/:experience_id/bookings/:booking_id",
            put(update_experience_booking),
        )
        .route("/:experience_id/reviews", post(review_experience))
        .route("/:experience_id/reviews", get(show_experience_reviews))
        .route("/:experience_id/rating", get(show_experience_rating))
        .route("/:experience_id/photos", post(add_experience_photo))
        .route("/:experience_id/videos", post(add_experience_video));

    let perk_routers = Router::new()
        .route("/", post(register_perk))
        .route("/", get(show_perk_list))
        .route("/:perk_id", delete(delete_perk));

    Router::new()
        .nest("/experiences", experience_routers)
        .nest("/perks", perk_routers)
}
