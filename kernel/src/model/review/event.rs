use super::ReviewTarget;
use crate::model::id::UserId;
use derive_new::new;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct CreateReview {
    pub user_id: UserId,
    pub target: ReviewTarget,
    pub rating: i32,
    pub payload: String,
}

impl CreateReview {
    pub fn validate(&self) -> AppResult<()> {
        if !(1..=5).contains(&self.rating) {
            return Err(AppError::UnprocessableEntity(
                "rating: must be between 1 and 5".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::id::RoomId;

    #[test]
    fn rating_must_be_between_one_and_five() {
        let make = |rating| {
            CreateReview::new(
                UserId::new(),
                ReviewTarget::Room(RoomId::new()),
                rating,
                "nice stay".into(),
            )
        };
        assert!(make(0).validate().is_err());
        assert!(make(6).validate().is_err());
        assert!(make(1).validate().is_ok());
        assert!(make(5).validate().is_ok());
    }
}
