pub mod event;

use crate::model::id::{ExperienceId, ReviewId, RoomId, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug)]
pub struct Review {
    pub review_id: ReviewId,
    pub user_id: UserId,
    pub user_name: String,
    pub target: ReviewTarget,
    pub rating: i32,
    pub payload: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy)]
pub enum ReviewTarget {
    Room(RoomId),
    Experience(ExperienceId),
}
