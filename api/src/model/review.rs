use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{ReviewId, UserId},
    list::PageQuery,
    review::{event::CreateReview, Review, ReviewTarget},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    #[garde(range(min = 1, max = 5))]
    pub rating: i32,
    #[garde(length(min = 1))]
    pub payload: String,
}

#[derive(new)]
pub struct CreateReviewRequestWithTarget(UserId, ReviewTarget, CreateReviewRequest);

impl From<CreateReviewRequestWithTarget> for CreateReview {
    fn from(value: CreateReviewRequestWithTarget) -> Self {
        let CreateReviewRequestWithTarget(
            user_id,
            target,
            CreateReviewRequest { rating, payload },
        ) = value;
        Self {
            user_id,
            target,
            rating,
            payload,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewListQuery {
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

impl From<ReviewListQuery> for PageQuery {
    fn from(value: ReviewListQuery) -> Self {
        Self { page: value.page }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsResponse {
    pub items: Vec<ReviewResponse>,
}

impl From<Vec<Review>> for ReviewsResponse {
    fn from(value: Vec<Review>) -> Self {
        Self {
            items: value.into_iter().map(ReviewResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub review_id: ReviewId,
    pub user_id: UserId,
    pub user_name: String,
    pub rating: i32,
    pub payload: String,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(value: Review) -> Self {
        let Review {
            review_id,
            user_id,
            user_name,
            target: _,
            rating,
            payload,
            created_at,
        } = value;
        Self {
            review_id,
            user_id,
            user_name,
            rating,
            payload,
            created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingResponse {
    pub rating: f64,
}
