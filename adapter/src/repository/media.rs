use crate::database::{
    model::media::{PhotoRow, VideoRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{ExperienceId, PhotoId, RoomId, UserId, VideoId},
    media::{
        event::{CreatePhoto, CreateVideo, DeletePhoto, DeleteVideo},
        MediaTarget, Photo, Video,
    },
};
use kernel::repository::media::MediaRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct MediaRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl MediaRepository for MediaRepositoryImpl {
    async fn add_photo(&self, event: CreatePhoto) -> AppResult<Photo> {
        let (room_id, experience_id) = match event.target {
            MediaTarget::Room(room_id) => {
                self.check_room_host(room_id, event.requested_user).await?;
                (Some(room_id), None)
            }
            MediaTarget::Experience(experience_id) => {
                self.check_experience_host(experience_id, event.requested_user)
                    .await?;
                (None, Some(experience_id))
            }
        };

        let row = sqlx::query_as::<_, PhotoRow>(
            r#"
                INSERT INTO photos (photo_id, url, description, room_id, experience_id)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING photo_id, url, description, room_id, experience_id
            "#,
        )
        .bind(PhotoId::new())
        .bind(&event.url)
        .bind(&event.description)
        .bind(room_id)
        .bind(experience_id)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.try_into()
    }

    async fn delete_photo(&self, event: DeletePhoto) -> AppResult<()> {
        let photo: Photo = sqlx::query_as::<_, PhotoRow>(
            r#"
                SELECT photo_id, url, description, room_id, experience_id
                FROM photos
                WHERE photo_id = $1
            "#,
        )
        .bind(event.photo_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("photo ({}) was not found", event.photo_id))
        })?
        .try_into()?;

        match photo.target {
            MediaTarget::Room(room_id) => {
                self.check_room_host(room_id, event.requested_user).await?
            }
            MediaTarget::Experience(experience_id) => {
                self.check_experience_host(experience_id, event.requested_user)
                    .await?
            }
        }

        sqlx::query(
            r#"
                DELETE FROM photos WHERE photo_id = $1
            "#,
        )
        .bind(event.photo_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }

    async fn add_video(&self, event: CreateVideo) -> AppResult<Video> {
        self.check_experience_host(event.experience_id, event.requested_user)
            .await?;

        // The unique index on experience_id enforces the one-video rule; a
        // second insert surfaces as a storage error by then, so check first.
        let already_has_video: bool = sqlx::query_scalar(
            r#"
                SELECT EXISTS (SELECT 1 FROM videos WHERE experience_id = $1)
            "#,
        )
        .bind(event.experience_id)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if already_has_video {
            return Err(AppError::UnprocessableEntity(
                "video: this experience already has a video".into(),
            ));
        }

        let row = sqlx::query_as::<_, VideoRow>(
            r#"
                INSERT INTO videos (video_id, url, experience_id)
                VALUES ($1, $2, $3)
                RETURNING video_id, url, experience_id
            "#,
        )
        .bind(VideoId::new())
        .bind(&event.url)
        .bind(event.experience_id)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.into())
    }

    async fn delete_video(&self, event: DeleteVideo) -> AppResult<()> {
        let video: Video = sqlx::query_as::<_, VideoRow>(
            r#"
                SELECT video_id, url, experience_id
                FROM videos
                WHERE video_id = $1
            "#,
        )
        .bind(event.video_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("video ({}) was not found", event.video_id))
        })?
        .into();

        self.check_experience_host(video.experience_id, event.requested_user)
            .await?;

        sqlx::query(
            r#"
                DELETE FROM videos WHERE video_id = $1
            "#,
        )
        .bind(event.video_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }
}

impl MediaRepositoryImpl {
    async fn check_room_host(&self, room_id: RoomId, requested_user: UserId) -> AppResult<()> {
        let owner_id: Option<UserId> =
            sqlx::query_scalar("SELECT owner_id FROM rooms WHERE room_id = $1")
                .bind(room_id)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        match owner_id {
            None => Err(AppError::EntityNotFound(format!(
                "room ({room_id}) was not found"
            ))),
            Some(owner_id) if owner_id != requested_user => Err(AppError::ForbiddenOperation),
            Some(_) => Ok(()),
        }
    }

    async fn check_experience_host(
        &self,
        experience_id: ExperienceId,
        requested_user: UserId,
    ) -> AppResult<()> {
        let host_id: Option<UserId> =
            sqlx::query_scalar("SELECT host_id FROM experiences WHERE experience_id = $1")
                .bind(experience_id)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        match host_id {
            None => Err(AppError::EntityNotFound(format!(
                "experience ({experience_id}) was not found"
            ))),
            Some(host_id) if host_id != requested_user => Err(AppError::ForbiddenOperation),
            Some(_) => Ok(()),
        }
    }
}
