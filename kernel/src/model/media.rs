use crate::model::id::{ExperienceId, PhotoId, RoomId, UserId, VideoId};

#[derive(Debug)]
pub struct Photo {
    pub photo_id: PhotoId,
    pub url: String,
    pub description: String,
    pub target: MediaTarget,
}

#[derive(Debug, Clone, Copy)]
pub enum MediaTarget {
    Room(RoomId),
    Experience(ExperienceId),
}

/// At most one video per experience.
#[derive(Debug)]
pub struct Video {
    pub video_id: VideoId,
    pub url: String,
    pub experience_id: ExperienceId,
}

pub mod event {
    use super::*;
    use derive_new::new;

    #[derive(new)]
    pub struct CreatePhoto {
        pub requested_user: UserId,
        pub url: String,
        pub description: String,
        pub target: MediaTarget,
    }

    #[derive(new)]
    pub struct DeletePhoto {
        pub photo_id: PhotoId,
        pub requested_user: UserId,
    }

    #[derive(new)]
    pub struct CreateVideo {
        pub requested_user: UserId,
        pub url: String,
        pub experience_id: ExperienceId,
    }

    #[derive(new)]
    pub struct DeleteVideo {
        pub video_id: VideoId,
        pub requested_user: UserId,
    }
}
