use crate::database::{
    model::message::{ChatRoomParticipantRow, MessageRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{ChatRoomId, MessageId, UserId},
    message::{
        event::{OpenChatRoom, PostMessage},
        ChatRoom, Message,
    },
    user::BookingUser,
};
use kernel::repository::message::MessageRepository;
use shared::error::{AppError, AppResult};
use std::collections::BTreeMap;

const SELECT_PARTICIPANTS: &str = r#"
    SELECT
        cr.chat_room_id,
        cr.created_at,
        u.user_id,
        u.user_name
    FROM chat_rooms AS cr
    INNER JOIN chat_room_participants AS crp ON cr.chat_room_id = crp.chat_room_id
    INNER JOIN users AS u ON crp.user_id = u.user_id
"#;

#[derive(new)]
pub struct MessageRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl MessageRepository for MessageRepositoryImpl {
    async fn open_chat_room(&self, event: OpenChatRoom) -> AppResult<ChatRoom> {
        if event.opened_by == event.peer {
            return Err(AppError::UnprocessableEntity(
                "peer: can't open a chat room with yourself".into(),
            ));
        }

        // Reuse the existing two-person room when one already connects the
        // pair, whoever opened it.
        let existing: Option<ChatRoomId> = sqlx::query_scalar(
            r#"
                SELECT a.chat_room_id
                FROM chat_room_participants AS a
                INNER JOIN chat_room_participants AS b
                        ON a.chat_room_id = b.chat_room_id
                WHERE a.user_id = $1 AND b.user_id = $2
            "#,
        )
        .bind(event.opened_by)
        .bind(event.peer)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if let Some(chat_room_id) = existing {
            return self.find_chat_room(chat_room_id).await?.ok_or_else(|| {
                AppError::EntityNotFound(format!("chat room ({chat_room_id}) was not found"))
            });
        }

        let mut tx = self.db.begin().await?;

        let chat_room_id = ChatRoomId::new();
        sqlx::query(
            r#"
                INSERT INTO chat_rooms (chat_room_id) VALUES ($1)
            "#,
        )
        .bind(chat_room_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        for user_id in [event.opened_by, event.peer] {
            sqlx::query(
                r#"
                    INSERT INTO chat_room_participants (chat_room_id, user_id)
                    VALUES ($1, $2)
                "#,
            )
            .bind(chat_room_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        self.find_chat_room(chat_room_id).await?.ok_or_else(|| {
            AppError::EntityNotFound(format!("chat room ({chat_room_id}) was not found"))
        })
    }

    async fn find_chat_rooms_for_user(&self, user_id: UserId) -> AppResult<Vec<ChatRoom>> {
        let rows = sqlx::query_as::<_, ChatRoomParticipantRow>(&format!(
            r#"{SELECT_PARTICIPANTS}
                WHERE cr.chat_room_id IN (
                    SELECT chat_room_id FROM chat_room_participants
                    WHERE user_id = $1
                )
                ORDER BY cr.created_at DESC, u.user_name ASC
            "#
        ))
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(group_into_chat_rooms(rows))
    }

    async fn find_chat_room(&self, chat_room_id: ChatRoomId) -> AppResult<Option<ChatRoom>> {
        let rows = sqlx::query_as::<_, ChatRoomParticipantRow>(&format!(
            "{SELECT_PARTICIPANTS} WHERE cr.chat_room_id = $1 ORDER BY u.user_name ASC"
        ))
        .bind(chat_room_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(group_into_chat_rooms(rows).into_iter().next())
    }

    async fn post_message(&self, event: PostMessage) -> AppResult<Message> {
        let room = self
            .find_chat_room(event.chat_room_id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!(
                    "chat room ({}) was not found",
                    event.chat_room_id
                ))
            })?;
        if !room.has_participant(event.sender_id) {
            return Err(AppError::ForbiddenOperation);
        }

        let row = sqlx::query_as::<_, MessageRow>(
            r#"
                INSERT INTO messages (message_id, chat_room_id, sender_id, text)
                VALUES ($1, $2, $3, $4)
                RETURNING message_id, chat_room_id, sender_id, text, created_at
            "#,
        )
        .bind(MessageId::new())
        .bind(event.chat_room_id)
        .bind(event.sender_id)
        .bind(&event.text)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.into())
    }

    async fn find_messages(&self, chat_room_id: ChatRoomId) -> AppResult<Vec<Message>> {
        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
                SELECT message_id, chat_room_id, sender_id, text, created_at
                FROM messages
                WHERE chat_room_id = $1
                ORDER BY created_at ASC
            "#,
        )
        .bind(chat_room_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Message::from).collect())
    }
}

// One row per (room, participant); fold into rooms keeping the query's
// row order.
fn group_into_chat_rooms(rows: Vec<ChatRoomParticipantRow>) -> Vec<ChatRoom> {
    let mut order = Vec::new();
    let mut grouped: BTreeMap<uuid::Uuid, ChatRoom> = BTreeMap::new();

    for row in rows {
        let key = row.chat_room_id.raw();
        let entry = grouped.entry(key).or_insert_with(|| {
            order.push(key);
            ChatRoom {
                chat_room_id: row.chat_room_id,
                participants: Vec::new(),
                created_at: row.created_at,
            }
        });
        entry.participants.push(BookingUser {
            user_id: row.user_id,
            user_name: row.user_name,
        });
    }

    order
        .into_iter()
        .filter_map(|key| grouped.remove(&key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn participant(chat_room_id: ChatRoomId, name: &str) -> ChatRoomParticipantRow {
        ChatRoomParticipantRow {
            chat_room_id,
            created_at: Utc::now(),
            user_id: UserId::new(),
            user_name: name.into(),
        }
    }

    #[test]
    fn rows_fold_into_rooms_preserving_order() {
        let first = ChatRoomId::new();
        let second = ChatRoomId::new();
        let rooms = group_into_chat_rooms(vec![
            participant(first, "ana"),
            participant(first, "bo"),
            participant(second, "cy"),
        ]);

        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].chat_room_id, first);
        assert_eq!(rooms[0].participants.len(), 2);
        assert_eq!(rooms[1].participants.len(), 1);
    }
}
