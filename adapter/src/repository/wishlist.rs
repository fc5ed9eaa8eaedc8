use crate::database::{model::wishlist::WishlistRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{ExperienceId, RoomId, UserId, WishlistId},
    wishlist::{
        event::{
            CreateWishlist, DeleteWishlist, RenameWishlist, ToggleWishlistExperience,
            ToggleWishlistRoom,
        },
        Wishlist,
    },
};
use kernel::repository::wishlist::WishlistRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct WishlistRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl WishlistRepository for WishlistRepositoryImpl {
    async fn create(&self, event: CreateWishlist) -> AppResult<Wishlist> {
        let row = sqlx::query_as::<_, WishlistRow>(
            r#"
                INSERT INTO wishlists (wishlist_id, user_id, name)
                VALUES ($1, $2, $3)
                RETURNING wishlist_id, user_id, name
            "#,
        )
        .bind(WishlistId::new())
        .bind(event.user_id)
        .bind(&event.name)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(Wishlist {
            wishlist_id: row.wishlist_id,
            user_id: row.user_id,
            name: row.name,
            rooms: vec![],
            experiences: vec![],
        })
    }

    async fn find_for_user(&self, user_id: UserId) -> AppResult<Vec<Wishlist>> {
        let rows = sqlx::query_as::<_, WishlistRow>(
            r#"
                SELECT wishlist_id, user_id, name
                FROM wishlists
                WHERE user_id = $1
                ORDER BY name ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let mut wishlists = Vec::with_capacity(rows.len());
        for row in rows {
            wishlists.push(self.hydrate(row).await?);
        }
        Ok(wishlists)
    }

    async fn find_by_id(&self, wishlist_id: WishlistId) -> AppResult<Option<Wishlist>> {
        let row = sqlx::query_as::<_, WishlistRow>(
            r#"
                SELECT wishlist_id, user_id, name
                FROM wishlists
                WHERE wishlist_id = $1
            "#,
        )
        .bind(wishlist_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        match row {
            Some(row) => Ok(Some(self.hydrate(row).await?)),
            None => Ok(None),
        }
    }

    async fn rename(&self, event: RenameWishlist) -> AppResult<Wishlist> {
        self.check_owner(event.wishlist_id, event.requested_user)
            .await?;

        let res = sqlx::query(
            r#"
                UPDATE wishlists SET name = $1 WHERE wishlist_id = $2
            "#,
        )
        .bind(&event.name)
        .bind(event.wishlist_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no wishlist record has been updated".into(),
            ));
        }

        self.find_by_id(event.wishlist_id).await?.ok_or_else(|| {
            AppError::EntityNotFound(format!("wishlist ({}) was not found", event.wishlist_id))
        })
    }

    async fn delete(&self, event: DeleteWishlist) -> AppResult<()> {
        self.check_owner(event.wishlist_id, event.requested_user)
            .await?;

        sqlx::query(
            r#"
                DELETE FROM wishlists WHERE wishlist_id = $1
            "#,
        )
        .bind(event.wishlist_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }

    async fn toggle_room(&self, event: ToggleWishlistRoom) -> AppResult<bool> {
        self.check_owner(event.wishlist_id, event.requested_user)
            .await?;

        let removed = sqlx::query(
            r#"
                DELETE FROM wishlist_rooms
                WHERE wishlist_id = $1 AND room_id = $2
            "#,
        )
        .bind(event.wishlist_id)
        .bind(event.room_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .rows_affected();

        if removed > 0 {
            return Ok(false);
        }

        self.check_room_exists(event.room_id).await?;
        sqlx::query(
            r#"
                INSERT INTO wishlist_rooms (wishlist_id, room_id)
                VALUES ($1, $2)
            "#,
        )
        .bind(event.wishlist_id)
        .bind(event.room_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(true)
    }

    async fn toggle_experience(&self, event: ToggleWishlistExperience) -> AppResult<bool> {
        self.check_owner(event.wishlist_id, event.requested_user)
            .await?;

        let removed = sqlx::query(
            r#"
                DELETE FROM wishlist_experiences
                WHERE wishlist_id = $1 AND experience_id = $2
            "#,
        )
        .bind(event.wishlist_id)
        .bind(event.experience_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .rows_affected();

        if removed > 0 {
            return Ok(false);
        }

        let exists: bool = sqlx::query_scalar(
            r#"
                SELECT EXISTS (SELECT 1 FROM experiences WHERE experience_id = $1)
            "#,
        )
        .bind(event.experience_id)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        if !exists {
            return Err(AppError::EntityNotFound(format!(
                "experience ({}) was not found",
                event.experience_id
            )));
        }

        sqlx::query(
            r#"
                INSERT INTO wishlist_experiences (wishlist_id, experience_id)
                VALUES ($1, $2)
            "#,
        )
        .bind(event.wishlist_id)
        .bind(event.experience_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(true)
    }
}

impl WishlistRepositoryImpl {
    async fn hydrate(&self, row: WishlistRow) -> AppResult<Wishlist> {
        let rooms: Vec<RoomId> = sqlx::query_scalar(
            r#"
                SELECT room_id FROM wishlist_rooms WHERE wishlist_id = $1
            "#,
        )
        .bind(row.wishlist_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let experiences: Vec<ExperienceId> = sqlx::query_scalar(
            r#"
                SELECT experience_id FROM wishlist_experiences WHERE wishlist_id = $1
            "#,
        )
        .bind(row.wishlist_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(Wishlist {
            wishlist_id: row.wishlist_id,
            user_id: row.user_id,
            name: row.name,
            rooms,
            experiences,
        })
    }

    async fn check_owner(&self, wishlist_id: WishlistId, requested_user: UserId) -> AppResult<()> {
        let owner: Option<UserId> =
            sqlx::query_scalar("SELECT user_id FROM wishlists WHERE wishlist_id = $1")
                .bind(wishlist_id)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;

        match owner {
            None => Err(AppError::EntityNotFound(format!(
                "wishlist ({wishlist_id}) was not found"
            ))),
            Some(owner) if owner != requested_user => Err(AppError::ForbiddenOperation),
            Some(_) => Ok(()),
        }
    }

    async fn check_room_exists(&self, room_id: RoomId) -> AppResult<()> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM rooms WHERE room_id = $1)")
                .bind(room_id)
                .fetch_one(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;
        if !exists {
            return Err(AppError::EntityNotFound(format!(
                "room ({room_id}) was not found"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
                VALUES ($1, $2, 'Cabin', 'Norway', 'Bergen', 150, 2, 1,
                        'desc', 'addr', TRUE, 'entire_place')
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
    async fn toggling_twice_round_trips(pg: sqlx::PgPool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pg);
        let repo = WishlistRepositoryImpl::new(db.clone());
        let user_id = seed_user(&db).await?;
        let room_id = seed_room(&db, user_id).await?;

        let wishlist = repo
            .create(CreateWishlist::new(user_id, "Winter trips".into()))
            .await?;

        let saved = repo
            .toggle_room(ToggleWishlistRoom::new(
                wishlist.wishlist_id,
                user_id,
                room_id,
            ))
            .await?;
        assert!(saved);

        let hydrated = repo.find_by_id(wishlist.wishlist_id).await?.unwrap();
        assert_eq!(hydrated.rooms, vec![room_id]);

        let saved = repo
            .toggle_room(ToggleWishlistRoom::new(
                wishlist.wishlist_id,
                user_id,
                room_id,
            ))
            .await?;
        assert!(!saved);

        let hydrated = repo.find_by_id(wishlist.wishlist_id).await?.unwrap();
        assert!(hydrated.rooms.is_empty());
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn strangers_cannot_touch_a_wishlist(pg: sqlx::PgPool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pg);
        let repo = WishlistRepositoryImpl::new(db.clone());
        let owner = seed_user(&db).await?;
        let stranger = seed_user(&db).await?;

        let wishlist = repo
            .create(CreateWishlist::new(owner, "Mine".into()))
            .await?;
        let err = repo
            .rename(RenameWishlist::new(
                wishlist.wishlist_id,
                stranger,
                "Yours".into(),
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ForbiddenOperation));
        Ok(())
    }
}
