use kernel::model::{
    id::{ExperienceId, PhotoId, RoomId, VideoId},
    media::{MediaTarget, Photo, Video},
};
use shared::error::AppError;

#[derive(sqlx::FromRow)]
pub struct PhotoRow {
    pub photo_id: PhotoId,
    pub url: String,
    pub description: String,
    pub room_id: Option<RoomId>,
    pub experience_id: Option<ExperienceId>,
}

impl TryFrom<PhotoRow> for Photo {
    type Error = AppError;

    fn try_from(value: PhotoRow) -> Result<Self, Self::Error> {
        let target = match (value.room_id, value.experience_id) {
            (Some(room_id), None) => MediaTarget::Room(room_id),
            (None, Some(experience_id)) => MediaTarget::Experience(experience_id),
            _ => {
                return Err(AppError::ConversionEntityError(format!(
                    "photo {} does not reference exactly one listing",
                    value.photo_id
                )))
            }
        };
        Ok(Photo {
            photo_id: value.photo_id,
            url: value.url,
            description: value.description,
            target,
        })
    }
}

#[derive(sqlx::FromRow)]
pub struct VideoRow {
    pub video_id: VideoId,
    pub url: String,
    pub experience_id: ExperienceId,
}

impl From<VideoRow> for Video {
    fn from(value: VideoRow) -> Self {
        let VideoRow {
            video_id,
            url,
            experience_id,
        } = value;
        Video {
            video_id,
            url,
            experience_id,
        }
    }
}
