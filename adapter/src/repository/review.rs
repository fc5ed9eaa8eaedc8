use crate::database::{model::review::ReviewRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::ReviewId,
    list::PageQuery,
    review::{event::CreateReview, Review, ReviewTarget},
};
use kernel::repository::review::ReviewRepository;
use shared::error::{AppError, AppResult};

const SELECT_REVIEW: &str = r#"
    SELECT
        rv.review_id,
        rv.user_id,
        u.user_name,
        rv.room_id,
        rv.experience_id,
        rv.rating,
        rv.payload,
        rv.created_at
    FROM reviews AS rv
    INNER JOIN users AS u ON rv.user_id = u.user_id
"#;

#[derive(new)]
pub struct ReviewRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryImpl {
    async fn create(&self, event: CreateReview) -> AppResult<Review> {
        event.validate()?;

        let mut tx = self.db.begin().await?;

        // Experience reviews need a booking to back them, and each guest may
        // leave only one per experience. Room reviews are open.
        if let ReviewTarget::Experience(experience_id) = event.target {
            let has_booked: bool = sqlx::query_scalar(
                r#"
                    SELECT EXISTS (
                        SELECT 1 FROM bookings
                        WHERE experience_id = $1 AND user_id = $2
                    )
                "#,
            )
            .bind(experience_id)
            .bind(event.user_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if !has_booked {
                return Err(AppError::ForbiddenOperation);
            }

            let already_reviewed: bool = sqlx::query_scalar(
                r#"
                    SELECT EXISTS (
                        SELECT 1 FROM reviews
                        WHERE experience_id = $1 AND user_id = $2
                    )
                "#,
            )
            .bind(experience_id)
            .bind(event.user_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if already_reviewed {
                return Err(AppError::UnprocessableEntity(
                    "review: you already reviewed this experience".into(),
                ));
            }
        }

        let (room_id, experience_id) = match event.target {
            ReviewTarget::Room(room_id) => (Some(room_id), None),
            ReviewTarget::Experience(experience_id) => (None, Some(experience_id)),
        };

        let review_id = ReviewId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO reviews
                (review_id, user_id, room_id, experience_id, rating, payload)
                VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(review_id)
        .bind(event.user_id)
        .bind(room_id)
        .bind(experience_id)
        .bind(event.rating)
        .bind(&event.payload)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no review record has been created".into(),
            ));
        }

        let review: Review =
            sqlx::query_as::<_, ReviewRow>(&format!("{SELECT_REVIEW} WHERE rv.review_id = $1"))
                .bind(review_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?
                .try_into()?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(review)
    }

    async fn find_for_target(
        &self,
        target: ReviewTarget,
        query: PageQuery,
    ) -> AppResult<Vec<Review>> {
        query.validate()?;

        let rows = match target {
            ReviewTarget::Room(room_id) => {
                sqlx::query_as::<_, ReviewRow>(&format!(
                    r#"{SELECT_REVIEW}
                        WHERE rv.room_id = $1
                        ORDER BY rv.created_at DESC
                        LIMIT $2 OFFSET $3
                    "#
                ))
                .bind(room_id)
                .bind(query.limit())
                .bind(query.offset())
                .fetch_all(self.db.inner_ref())
                .await
            }
            ReviewTarget::Experience(experience_id) => {
                sqlx::query_as::<_, ReviewRow>(&format!(
                    r#"{SELECT_REVIEW}
                        WHERE rv.experience_id = $1
                        ORDER BY rv.created_at DESC
                        LIMIT $2 OFFSET $3
                    "#
                ))
                .bind(experience_id)
                .bind(query.limit())
                .bind(query.offset())
                .fetch_all(self.db.inner_ref())
                .await
            }
        }
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Review::try_from).collect()
    }

    async fn average_rating(&self, target: ReviewTarget) -> AppResult<f64> {
        let rating: f64 = match target {
            ReviewTarget::Room(room_id) => {
                sqlx::query_scalar(
                    r#"
                        SELECT COALESCE(AVG(rating)::float8, 0)
                        FROM reviews
                        WHERE room_id = $1
                    "#,
                )
                .bind(room_id)
                .fetch_one(self.db.inner_ref())
                .await
            }
            ReviewTarget::Experience(experience_id) => {
                sqlx::query_scalar(
                    r#"
                        SELECT COALESCE(AVG(rating)::float8, 0)
                        FROM reviews
                        WHERE experience_id = $1
                    "#,
                )
                .bind(experience_id)
                .fetch_one(self.db.inner_ref())
                .await
            }
        }
        .map_err(AppError::SpecificOperationError)?;

        Ok(rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::id::{RoomId, UserId};

    async fn seed_user(db: &ConnectionPool) -> AppResult<UserId> {
        let user_id = UserId::new();
        sqlx::query(
            r#"
                INSERT INTO users (user_id, user_name, email, password_hash, is_host, role_name)
                VALUES ($1, 'guest', $2, 'x', FALSE, 'User')
            "#,
        )
        .bind(user_id)
        .bind(format!("{user_id}@example.com"))
        .execute(db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(user_id)
    }

    async fn seed_room(db: &ConnectionPool, owner_id: UserId) -> AppResult<RoomId> {
        let room_id = RoomId::new();
        sqlx::query(
            r#"
                INSERT INTO rooms
                (room_id, owner_id, name, country, city, price, rooms, toilets,
                 description, address, pet_friendly, kind)
                VALUES ($1, $2, 'Loft', 'Korea', 'Seoul', 90, 1, 1,
                        'desc', 'addr', FALSE, 'private_room')
            "#,
        )
        .bind(room_id)
        .bind(owner_id)
        .execute(db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(room_id)
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn average_is_the_mean_of_ratings(pg: sqlx::PgPool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pg);
        let repo = ReviewRepositoryImpl::new(db.clone());
        let owner = seed_user(&db).await?;
        let room_id = seed_room(&db, owner).await?;

        for rating in [5, 3] {
            let reviewer = seed_user(&db).await?;
            repo.create(CreateReview::new(
                reviewer,
                ReviewTarget::Room(room_id),
                rating,
                "fine".into(),
            ))
            .await?;
        }

        let avg = repo.average_rating(ReviewTarget::Room(room_id)).await?;
        assert_eq!(avg, 4.0);
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn unreviewed_listing_averages_zero(pg: sqlx::PgPool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pg);
        let repo = ReviewRepositoryImpl::new(db.clone());
        let owner = seed_user(&db).await?;
        let room_id = seed_room(&db, owner).await?;

        let avg = repo.average_rating(ReviewTarget::Room(room_id)).await?;
        assert_eq!(avg, 0.0);
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn experience_review_requires_a_booking(pg: sqlx::PgPool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pg);
        let repo = ReviewRepositoryImpl::new(db.clone());
        let host = seed_user(&db).await?;
        let guest = seed_user(&db).await?;

        let experience_id = kernel::model::id::ExperienceId::new();
        sqlx::query(
            r#"
                INSERT INTO experiences
                (experience_id, host_id, name, country, city, price,
                 description, address, schedule_start, schedule_end,
                 duration_minutes)
                VALUES ($1, $2, 'Walk', 'Japan', 'Nara', 10, 'd', 'a',
                        '09:00', '17:00', 60)
            "#,
        )
        .bind(experience_id)
        .bind(host)
        .execute(db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let err = repo
            .create(CreateReview::new(
                guest,
                ReviewTarget::Experience(experience_id),
                5,
                "lovely".into(),
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ForbiddenOperation));
        Ok(())
    }
}
