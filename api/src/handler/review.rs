use crate::{
    extractor::AuthorizedUser,
    model::review::{
        CreateReviewRequest, CreateReviewRequestWithTarget, RatingResponse, ReviewListQuery,
        ReviewResponse, ReviewsResponse,
    },
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    id::{ExperienceId, RoomId},
    review::ReviewTarget,
};
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn review_room(
    user: AuthorizedUser,
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReviewRequest>,
) -> AppResult<(StatusCode, Json<ReviewResponse>)> {
    req.validate(&())?;

    let review = registry
        .review_repository()
        .create(
            CreateReviewRequestWithTarget::new(user.id(), ReviewTarget::Room(room_id), req).into(),
        )
        .await?;
    Ok((StatusCode::CREATED, Json(review.into())))
}

pub async fn review_experience(
    user: AuthorizedUser,
    Path(experience_id): Path<ExperienceId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReviewRequest>,
) -> AppResult<(StatusCode, Json<ReviewResponse>)> {
    req.validate(&())?;

    let review = registry
        .review_repository()
        .create(
            CreateReviewRequestWithTarget::new(
                user.id(),
                ReviewTarget::Experience(experience_id),
                req,
            )
            .into(),
        )
        .await?;
    Ok((StatusCode::CREATED, Json(review.into())))
}

pub async fn show_room_reviews(
    _user: AuthorizedUser,
    Path(room_id): Path<RoomId>,
    Query(query): Query<ReviewListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReviewsResponse>> {
    registry
        .review_repository()
        .find_for_target(ReviewTarget::Room(room_id), query.into())
        .await
        .map(ReviewsResponse::from)
        .map(Json)
}

pub async fn show_experience_reviews(
    _user: AuthorizedUser,
    Path(experience_id): Path<ExperienceId>,
    Query(query): Query<ReviewListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReviewsResponse>> {
    registry
        .review_repository()
        .find_for_target(ReviewTarget::Experience(experience_id), query.into())
        .await
        .map(ReviewsResponse::from)
        .map(Json)
}

pub async fn show_room_rating(
    _user: AuthorizedUser,
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RatingResponse>> {
    let rating = registry
        .review_repository()
        .average_rating(ReviewTarget::Room(room_id))
        .await?;
    Ok(Json(RatingResponse { rating }))
}

pub async fn show_experience_rating(
    _user: AuthorizedUser,
    Path(experience_id): Path<ExperienceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RatingResponse>> {
    let rating = registry
        .review_repository()
        .average_rating(ReviewTarget::Experience(experience_id))
        .await?;
    Ok(Json(RatingResponse { rating }))
}
