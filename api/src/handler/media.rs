use crate::{
    extractor::AuthorizedUser,
    model::media::{CreatePhotoRequest, CreateVideoRequest, PhotoResponse, VideoResponse},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    id::{ExperienceId, PhotoId, RoomId, VideoId},
    media::{
        event::{CreatePhoto, CreateVideo, DeletePhoto, DeleteVideo},
        MediaTarget,
    },
};
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn add_room_photo(
    user: AuthorizedUser,
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreatePhotoRequest>,
) -> AppResult<(StatusCode, Json<PhotoResponse>)> {
    req.validate(&())?;

    let photo = registry
        .media_repository()
        .add_photo(CreatePhoto::new(
            user.id(),
            req.url,
            req.description,
            MediaTarget::Room(room_id),
        ))
        .await?;
    Ok((StatusCode::CREATED, Json(photo.into())))
}

pub async fn add_experience_photo(
    user: AuthorizedUser,
    Path(experience_id): Path<ExperienceId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreatePhotoRequest>,
) -> AppResult<(StatusCode, Json<PhotoResponse>)> {
    req.validate(&())?;

    let photo = registry
        .media_repository()
        .add_photo(CreatePhoto::new(
            user.id(),
            req.url,
            req.description,
            MediaTarget::Experience(experience_id),
        ))
        .await?;
    Ok((StatusCode::CREATED, Json(photo.into())))
}

pub async fn delete_photo(
    user: AuthorizedUser,
    Path(photo_id): Path<PhotoId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .media_repository()
        .delete_photo(DeletePhoto::new(photo_id, user.id()))
        .await
        .map(|_| StatusCode::NO_CONTENT)
}

pub async fn add_experience_video(
    user: AuthorizedUser,
    Path(experience_id): Path<ExperienceId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateVideoRequest>,
) -> AppResult<(StatusCode, Json<VideoResponse>)> {
    req.validate(&())?;

    let video = registry
        .media_repository()
        .add_video(CreateVideo::new(user.id(), req.url, experience_id))
        .await?;
    Ok((StatusCode::CREATED, Json(video.into())))
}

pub async fn delete_video(
    user: AuthorizedUser,
    Path(video_id): Path<VideoId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .media_repository()
        .delete_video(DeleteVideo::new(video_id, user.id()))
        .await
        .map(|_| StatusCode::NO_CONTENT)
}
