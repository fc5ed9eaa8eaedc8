use crate::model::id::{ChatRoomId, MessageId, UserId};
use crate::model::user::BookingUser;
use chrono::{DateTime, Utc};

#[derive(Debug)]
pub struct ChatRoom {
    pub chat_room_id: ChatRoomId,
    pub participants: Vec<BookingUser>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct Message {
    pub message_id: MessageId,
    pub chat_room_id: ChatRoomId,
    /// None when the sending account has been deleted.
    pub sender_id: Option<UserId>,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl ChatRoom {
    pub fn has_participant(&self, user_id: UserId) -> bool {
        self.participants.iter().any(|p| p.user_id == user_id)
    }
}

pub mod event {
    use super::*;
    use derive_new::new;

    #[derive(new)]
    pub struct OpenChatRoom {
        pub opened_by: UserId,
        pub peer: UserId,
    }

    #[derive(new)]
    pub struct PostMessage {
        pub chat_room_id: ChatRoomId,
        pub sender_id: UserId,
        pub text: String,
    }
}
