use crate::model::{
    list::PageQuery,
    review::{event::CreateReview, Review, ReviewTarget},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, event: CreateReview) -> AppResult<Review>;
    async fn find_for_target(
        &self,
        target: ReviewTarget,
        query: PageQuery,
    ) -> AppResult<Vec<Review>>;
    /// Mean rating of the listing; 0.0 when it has no reviews.
    async fn average_rating(&self, target: ReviewTarget) -> AppResult<f64>;
}
