use chrono::{DateTime, Utc};
use kernel::model::{
    id::{ExperienceId, ReviewId, RoomId, UserId},
    review::{Review, ReviewTarget},
};
use shared::error::AppError;

#[derive(sqlx::FromRow)]
pub struct ReviewRow {
    pub review_id: ReviewId,
    pub user_id: UserId,
    pub user_name: String,
    pub room_id: Option<RoomId>,
    pub experience_id: Option<ExperienceId>,
    pub rating: i32,
    pub payload: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<ReviewRow> for Review {
    type Error = AppError;

    fn try_from(value: ReviewRow) -> Result<Self, Self::Error> {
        let target = match (value.room_id, value.experience_id) {
            (Some(room_id), None) => ReviewTarget::Room(room_id),
            (None, Some(experience_id)) => ReviewTarget::Experience(experience_id),
            _ => {
                return Err(AppError::ConversionEntityError(format!(
                    "review {} does not reference exactly one listing",
                    value.review_id
                )))
            }
        };
        Ok(Review {
            review_id: value.review_id,
            user_id: value.user_id,
            user_name: value.user_name,
            target,
            rating: value.rating,
            payload: value.payload,
            created_at: value.created_at,
        })
    }
}
