use crate::{
    extractor::AuthorizedUser,
    model::message::{
        ChatRoomResponse, ChatRoomsResponse, MessageResponse, MessagesResponse,
        OpenChatRoomRequest, PostMessageRequest,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    id::ChatRoomId,
    message::event::{OpenChatRoom, PostMessage},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn open_chat_room(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<OpenChatRoomRequest>,
) -> AppResult<(StatusCode, Json<ChatRoomResponse>)> {
    req.validate(&())?;

    let room = registry
        .message_repository()
        .open_chat_room(OpenChatRoom::new(user.id(), req.peer))
        .await?;
    Ok((StatusCode::CREATED, Json(room.into())))
}

pub async fn show_chat_room_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ChatRoomsResponse>> {
    registry
        .message_repository()
        .find_chat_rooms_for_user(user.id())
        .await
        .map(ChatRoomsResponse::from)
        .map(Json)
}

pub async fn show_chat_room(
    user: AuthorizedUser,
    Path(chat_room_id): Path<ChatRoomId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ChatRoomResponse>> {
    let room = registry
        .message_repository()
        .find_chat_room(chat_room_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("not found".into()))?;
    if !room.has_participant(user.id()) {
        return Err(AppError::ForbiddenOperation);
    }
    Ok(Json(room.into()))
}

pub async fn post_message(
    user: AuthorizedUser,
    Path(chat_room_id): Path<ChatRoomId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<PostMessageRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    req.validate(&())?;

    let message = registry
        .message_repository()
        .post_message(PostMessage::new(chat_room_id, user.id(), req.text))
        .await?;
    Ok((StatusCode::CREATED, Json(message.into())))
}

pub async fn show_messages(
    user: AuthorizedUser,
    Path(chat_room_id): Path<ChatRoomId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MessagesResponse>> {
    let room = registry
        .message_repository()
        .find_chat_room(chat_room_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("not found".into()))?;
    if !room.has_participant(user.id()) {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .message_repository()
        .find_messages(chat_room_id)
        .await
        .map(MessagesResponse::from)
        .map(Json)
}
