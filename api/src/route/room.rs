use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::{
    booking::{book_bed, book_room, show_bed_bookings, show_room_bookings},
    media::add_room_photo,
    review::{review_room, show_room_rating, show_room_reviews},
    room::{
        delete_amenity, delete_bed, delete_room, register_amenity, register_bed, register_room,
        show_amenity_list, show_bed, show_bed_list, show_room, show_room_amenities,
        show_room_list, update_bed, update_room,
    },
};

pub fn build_room_routers() -> Router<AppRegistry> {
    let room_routers = Router::new()
        .route("/", post(register_room))
        .route("/", get(show_room_list))
        .route("/:room_id", get(show_room))
        .route("/:room_id", put(update_room))
        .route("/:room_id", delete(delete_room))
        .route("/:room_id/amenities", get(show_room_amenities))
        .route("/:room_id/beds", post(register_bed))
        .route("/:room_id/beds", get(show_bed_list))
        .route("/:room_id/beds/:bed_id", get(show_bed))
        .route("/:room_id/beds/:bed_id", put(update_bed))
        .route("/:room_id/beds/:bed_id", delete(delete_bed))
        .route("/:room_id/bookings", post(book_room))
        .route("/:room_id/bookings", get(show_room_bookings))
        .route("/:room_id/beds/:bed_id/bookings", post(book_bed))
        .route("/:room_id/beds/:bed_id/bookings", get(show_bed_bookings))
        .route("/:room_id/reviews", post(review_room))
        .route("/:room_id/reviews", get(show_room_reviews))
        .route("/:room_id/rating", get(show_room_rating))
        .route("/:room_id/photos", post(add_room_photo));

    let amenity_routers = Router::new()
        .route("/", post(register_amenity))
        .route("/", get(show_amenity_list))
        .route("/:amenity_id", delete(delete_amenity));

    Router::new()
        .nest("/rooms", room_routers)
        .nest("/amenities", amenity_routers)
}
