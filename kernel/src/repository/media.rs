use crate::model::media::{
    event::{CreatePhoto, CreateVideo, DeletePhoto, DeleteVideo},
    Photo, Video,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait MediaRepository: Send + Sync {
    async fn add_photo(&self, event: CreatePhoto) -> AppResult<Photo>;
    async fn delete_photo(&self, event: DeletePhoto) -> AppResult<()>;
    async fn add_video(&self, event: CreateVideo) -> AppResult<Video>;
    async fn delete_video(&self, event: DeleteVideo) -> AppResult<()>;
}
