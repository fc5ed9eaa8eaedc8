use crate::model::user::BookingUserResponse;
use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::{ChatRoomId, MessageId, UserId},
    message::{ChatRoom, Message},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OpenChatRoomRequest {
    #[garde(skip)]
    pub peer: UserId,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PostMessageRequest {
    #[garde(length(min = 1))]
    pub text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRoomsResponse {
    pub items: Vec<ChatRoomResponse>,
}

impl From<Vec<ChatRoom>> for ChatRoomsResponse {
    fn from(value: Vec<ChatRoom>) -> Self {
        Self {
            items: value.into_iter().map(ChatRoomResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRoomResponse {
    pub chat_room_id: ChatRoomId,
    pub participants: Vec<BookingUserResponse>,
    pub created_at: DateTime<Utc>,
}

impl From<ChatRoom> for ChatRoomResponse {
    fn from(value: ChatRoom) -> Self {
        let ChatRoom {
            chat_room_id,
            participants,
            created_at,
        } = value;
        Self {
            chat_room_id,
            participants: participants
                .into_iter()
                .map(BookingUserResponse::from)
                .collect(),
            created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagesResponse {
    pub items: Vec<MessageResponse>,
}

impl From<Vec<Message>> for MessagesResponse {
    fn from(value: Vec<Message>) -> Self {
        Self {
            items: value.into_iter().map(MessageResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message_id: MessageId,
    pub chat_room_id: ChatRoomId,
    pub sender_id: Option<UserId>,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(value: Message) -> Self {
        let Message {
            message_id,
            chat_room_id,
            sender_id,
            text,
            created_at,
        } = value;
        Self {
            message_id,
            chat_room_id,
            sender_id,
            text,
            created_at,
        }
    }
}
