use chrono::{DateTime, Utc};
use kernel::model::{
    id::{ChatRoomId, MessageId, UserId},
    message::Message,
};

#[derive(sqlx::FromRow)]
pub struct ChatRoomParticipantRow {
    pub chat_room_id: ChatRoomId,
    pub created_at: DateTime<Utc>,
    pub user_id: UserId,
    pub user_name: String,
}

#[derive(sqlx::FromRow)]
pub struct MessageRow {
    pub message_id: MessageId,
    pub chat_room_id: ChatRoomId,
    pub sender_id: Option<UserId>,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<MessageRow> for Message {
    fn from(value: MessageRow) -> Self {
        let MessageRow {
            message_id,
            chat_room_id,
            sender_id,
            text,
            created_at,
        } = value;
        Message {
            message_id,
            chat_room_id,
            sender_id,
            text,
            created_at,
        }
    }
}
