use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::message::{
    open_chat_room, post_message, show_chat_room, show_chat_room_list, show_messages,
};

pub fn build_message_routers() -> Router<AppRegistry> {
    let chat_room_routers = Router::new()
        .route("/", post(open_chat_room))
        .route("/", get(show_chat_room_list))
        .route("/:chat_room_id", get(show_chat_room))
        .route("/:chat_room_id/messages", post(post_message))
        .route("/:chat_room_id/messages", get(show_messages));

    Router::new().nest("/chat-rooms", chat_room_routers)
}
