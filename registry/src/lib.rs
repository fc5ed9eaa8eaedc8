use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::redis::RedisClient;
use adapter::repository::auth::AuthRepositoryImpl;
use adapter::repository::booking::BookingRepositoryImpl;
use adapter::repository::category::CategoryRepositoryImpl;
use adapter::repository::experience::ExperienceRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::media::MediaRepositoryImpl;
use adapter::repository::message::MessageRepositoryImpl;
use adapter::repository::review::ReviewRepositoryImpl;
use adapter::repository::room::RoomRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use adapter::repository::wishlist::WishlistRepositoryImpl;
use kernel::repository::auth::AuthRepository;
use kernel::repository::booking::BookingRepository;
use kernel::repository::category::CategoryRepository;
use kernel::repository::experience::ExperienceRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::media::MediaRepository;
use kernel::repository::message::MessageRepository;
use kernel::repository::review::ReviewRepository;
use kernel::repository::room::RoomRepository;
use kernel::repository::user::UserRepository;
use kernel::repository::wishlist::WishlistRepository;
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    user_repository: Arc<dyn UserRepository>,
    category_repository: Arc<dyn CategoryRepository>,
    room_repository: Arc<dyn RoomRepository>,
    experience_repository: Arc<dyn ExperienceRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    review_repository: Arc<dyn ReviewRepository>,
    media_repository: Arc<dyn MediaRepository>,
    message_repository: Arc<dyn MessageRepository>,
    wishlist_repository: Arc<dyn WishlistRepository>,
}

impl AppRegistry {
    pub fn new(
        pool: ConnectionPool,
        redis_client: Arc<RedisClient>,
        app_config: AppConfig,
    ) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(
            pool.clone(),
            redis_client.clone(),
            app_config.auth.ttl,
        ));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let category_repository = Arc::new(CategoryRepositoryImpl::new(pool.clone()));
        let room_repository = Arc::new(RoomRepositoryImpl::new(pool.clone()));
        let experience_repository = Arc::new(ExperienceRepositoryImpl::new(pool.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(pool.clone()));
        let review_repository = Arc::new(ReviewRepositoryImpl::new(pool.clone()));
        let media_repository = Arc::new(MediaRepositoryImpl::new(pool.clone()));
        let message_repository = Arc::new(MessageRepositoryImpl::new(pool.clone()));
        let wishlist_repository = Arc::new(WishlistRepositoryImpl::new(pool.clone()));
        Self {
            health_check_repository,
            auth_repository,
            user_repository,
            category_repository,
            room_repository,
            experience_repository,
            booking_repository,
            review_repository,
            media_repository,
            message_repository,
            wishlist_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn category_repository(&self) -> Arc<dyn CategoryRepository> {
        self.category_repository.clone()
    }

    pub fn room_repository(&self) -> Arc<dyn RoomRepository> {
        self.room_repository.clone()
    }

    pub fn experience_repository(&self) -> Arc<dyn ExperienceRepository> {
        self.experience_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn review_repository(&self) -> Arc<dyn ReviewRepository> {
        self.review_repository.clone()
    }

    pub fn media_repository(&self) -> Arc<dyn MediaRepository> {
        self.media_repository.clone()
    }

    pub fn message_repository(&self) -> Arc<dyn MessageRepository> {
        self.message_repository.clone()
    }

    pub fn wishlist_repository(&self) -> Arc<dyn WishlistRepository> {
        self.wishlist_repository.clone()
    }
}
