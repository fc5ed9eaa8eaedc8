use crate::model::{
    id::{ChatRoomId, UserId},
    message::{
        event::{OpenChatRoom, PostMessage},
        ChatRoom, Message,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn open_chat_room(&self, event: OpenChatRoom) -> AppResult<ChatRoom>;
    async fn find_chat_rooms_for_user(&self, user_id: UserId) -> AppResult<Vec<ChatRoom>>;
    async fn find_chat_room(&self, chat_room_id: ChatRoomId) -> AppResult<Option<ChatRoom>>;
    async fn post_message(&self, event: PostMessage) -> AppResult<Message>;
    async fn find_messages(&self, chat_room_id: ChatRoomId) -> AppResult<Vec<Message>>;
}
