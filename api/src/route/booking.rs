use axum::{routing::delete, Router};
use registry::AppRegistry;

use crate::handler::{
    booking::cancel_booking,
    media::{delete_photo, delete_video},
};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let booking_routers = Router::new().route("/:booking_id", delete(cancel_booking));

    let photo_routers = Router::new().route("/:photo_id", delete(delete_photo));
    let video_routers = Router::new().route("/:video_id", delete(delete_video));

    Router::new()
        .nest("/bookings", booking_routers)
        .nest("/photos", photo_routers)
        .nest("/videos", video_routers)
}
