use garde::Validate;
use kernel::model::{
    id::{ExperienceId, PhotoId, RoomId, VideoId},
    media::{MediaTarget, Photo, Video},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePhotoRequest {
    #[garde(url)]
    pub url: String,
    #[garde(skip)]
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoRequest {
    #[garde(url)]
    pub url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoResponse {
    pub photo_id: PhotoId,
    pub url: String,
    pub description: String,
    pub room_id: Option<RoomId>,
    pub experience_id: Option<ExperienceId>,
}

impl From<Photo> for PhotoResponse {
    fn from(value: Photo) -> Self {
        let (room_id, experience_id) = match value.target {
            MediaTarget::Room(room_id) => (Some(room_id), None),
            MediaTarget::Experience(experience_id) => (None, Some(experience_id)),
        };
        Self {
            photo_id: value.photo_id,
            url: value.url,
            description: value.description,
            room_id,
            experience_id,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    pub video_id: VideoId,
    pub url: String,
    pub experience_id: ExperienceId,
}

impl From<Video> for VideoResponse {
    fn from(value: Video) -> Self {
        let Video {
            video_id,
            url,
            experience_id,
        } = value;
        Self {
            video_id,
            url,
            experience_id,
        }
    }
}
