use crate::database::{
    model::room::{AmenityRow, BedRow, RoomRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    category::CategoryKind,
    id::{AmenityId, BedId, CategoryId, RoomId, UserId},
    room::{
        event::{CreateAmenity, CreateBed, CreateRoom, DeleteBed, DeleteRoom, UpdateBed, UpdateRoom},
        Amenity, Bed, Room,
    },
};
use kernel::repository::room::RoomRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct RoomRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl RoomRepository for RoomRepositoryImpl {
    async fn create(&self, event: CreateRoom) -> AppResult<Room> {
        let mut tx = self.db.begin().await?;

        if let Some(category_id) = event.category_id {
            check_category_kind(&mut tx, category_id, CategoryKind::Rooms).await?;
        }

        let room_id = RoomId::new();
        let row = sqlx::query_as::<_, RoomRow>(
            r#"
                INSERT INTO rooms
                (room_id, owner_id, name, country, city, price, rooms, toilets,
                 description, address, pet_friendly, kind, category_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
                RETURNING
                    room_id, owner_id, name, country, city, price, rooms,
                    toilets, description, address, pet_friendly, kind,
                    category_id
            "#,
        )
        .bind(room_id)
        .bind(event.owner_id)
        .bind(&event.name)
        .bind(&event.country)
        .bind(&event.city)
        .bind(event.price)
        .bind(event.rooms)
        .bind(event.toilets)
        .bind(&event.description)
        .bind(&event.address)
        .bind(event.pet_friendly)
        .bind(event.kind.as_ref().to_owned())
        .bind(event.category_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        replace_room_amenities(&mut tx, room_id, &event.amenities).await?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        row.try_into()
    }

    async fn find_all(&self) -> AppResult<Vec<Room>> {
        let rows = sqlx::query_as::<_, RoomRow>(
            r#"
                SELECT
                    room_id, owner_id, name, country, city, price, rooms,
                    toilets, description, address, pet_friendly, kind,
                    category_id
                FROM rooms
                ORDER BY name ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        rows.into_iter().map(Room::try_from).collect()
    }

    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, RoomRow>(
            r#"
                SELECT
                    room_id, owner_id, name, country, city, price, rooms,
                    toilets, description, address, pet_friendly, kind,
                    category_id
                FROM rooms
                WHERE room_id = $1
            "#,
        )
        .bind(room_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(Room::try_from)
        .transpose()
    }

    async fn update(&self, event: UpdateRoom) -> AppResult<Room> {
        let mut tx = self.db.begin().await?;

        let current = self
            .fetch_for_owner_check(&mut tx, event.room_id, event.requested_user)
            .await?;

        if let Some(category_id) = event.category_id {
            check_category_kind(&mut tx, category_id, CategoryKind::Rooms).await?;
        }

        let row = sqlx::query_as::<_, RoomRow>(
            r#"
                UPDATE rooms
                SET name = $1, country = $2, city = $3, price = $4, rooms = $5,
                    toilets = $6, description = $7, address = $8,
                    pet_friendly = $9, kind = $10, category_id = $11
                WHERE room_id = $12
                RETURNING
                    room_id, owner_id, name, country, city, price, rooms,
                    toilets, description, address, pet_friendly, kind,
                    category_id
            "#,
        )
        .bind(event.name.unwrap_or(current.name))
        .bind(event.country.unwrap_or(current.country))
        .bind(event.city.unwrap_or(current.city))
        .bind(event.price.unwrap_or(current.price))
        .bind(event.rooms.unwrap_or(current.rooms))
        .bind(event.toilets.unwrap_or(current.toilets))
        .bind(event.description.unwrap_or(current.description))
        .bind(event.address.unwrap_or(current.address))
        .bind(event.pet_friendly.unwrap_or(current.pet_friendly))
        .bind(event.kind.unwrap_or(current.kind).as_ref().to_owned())
        .bind(event.category_id.or(current.category_id))
        .bind(event.room_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if let Some(amenities) = event.amenities {
            replace_room_amenities(&mut tx, event.room_id, &amenities).await?;
        }

        tx.commit().await.map_err(AppError::TransactionError)?;
        row.try_into()
    }

    async fn delete(&self, event: DeleteRoom) -> AppResult<()> {
        let mut tx = self.db.begin().await?;
        self.fetch_for_owner_check(&mut tx, event.room_id, event.requested_user)
            .await?;

        let res = sqlx::query(
            r#"
                DELETE FROM rooms WHERE room_id = $1
            "#,
        )
        .bind(event.room_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified room not found".into()));
        }
        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(())
    }

    async fn add_bed(&self, event: CreateBed) -> AppResult<Bed> {
        let mut tx = self.db.begin().await?;
        self.fetch_for_owner_check(&mut tx, event.room_id, event.requested_user)
            .await?;

        let row = sqlx::query_as::<_, BedRow>(
            r#"
                INSERT INTO beds (bed_id, room_id, name, bed_type, capacity)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING bed_id, room_id, name, bed_type, capacity
            "#,
        )
        .bind(BedId::new())
        .bind(event.room_id)
        .bind(&event.name)
        .bind(&event.bed_type)
        .bind(event.capacity)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(row.into())
    }

    async fn find_beds(&self, room_id: RoomId, bed_type: Option<String>) -> AppResult<Vec<Bed>> {
        let rows = sqlx::query_as::<_, BedRow>(
            r#"
                SELECT bed_id, room_id, name, bed_type, capacity
                FROM beds
                WHERE room_id = $1
                  AND ($2::varchar IS NULL OR bed_type = $2)
                ORDER BY name ASC
            "#,
        )
        .bind(room_id)
        .bind(bed_type)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(rows.into_iter().map(Bed::from).collect())
    }

    async fn find_bed(&self, room_id: RoomId, bed_id: BedId) -> AppResult<Option<Bed>> {
        let row = sqlx::query_as::<_, BedRow>(
            r#"
                SELECT bed_id, room_id, name, bed_type, capacity
                FROM beds
                WHERE room_id = $1 AND bed_id = $2
            "#,
        )
        .bind(room_id)
        .bind(bed_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(row.map(Bed::from))
    }

    async fn update_bed(&self, event: UpdateBed) -> AppResult<Bed> {
        let mut tx = self.db.begin().await?;
        self.fetch_for_owner_check(&mut tx, event.room_id, event.requested_user)
            .await?;

        let current = sqlx::query_as::<_, BedRow>(
            r#"
                SELECT bed_id, room_id, name, bed_type, capacity
                FROM beds
                WHERE room_id = $1 AND bed_id = $2
            "#,
        )
        .bind(event.room_id)
        .bind(event.bed_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| AppError::EntityNotFound(format!("bed ({}) was not found", event.bed_id)))?;

        let row = sqlx::query_as::<_, BedRow>(
            r#"
                UPDATE beds
                SET name = $1, bed_type = $2, capacity = $3
                WHERE bed_id = $4
                RETURNING bed_id, room_id, name, bed_type, capacity
            "#,
        )
        .bind(event.name.unwrap_or(current.name))
        .bind(event.bed_type.unwrap_or(current.bed_type))
        .bind(event.capacity.unwrap_or(current.capacity))
        .bind(event.bed_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(row.into())
    }

    async fn delete_bed(&self, event: DeleteBed) -> AppResult<()> {
        let mut tx = self.db.begin().await?;
        self.fetch_for_owner_check(&mut tx, event.room_id, event.requested_user)
            .await?;

        let res = sqlx::query(
            r#"
                DELETE FROM beds WHERE room_id = $1 AND bed_id = $2
            "#,
        )
        .bind(event.room_id)
        .bind(event.bed_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified bed not found".into()));
        }
        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(())
    }

    async fn create_amenity(&self, event: CreateAmenity) -> AppResult<Amenity> {
        let row = sqlx::query_as::<_, AmenityRow>(
            r#"
                INSERT INTO amenities (amenity_id, name, description)
                VALUES ($1, $2, $3)
                RETURNING amenity_id, name, description
            "#,
        )
        .bind(AmenityId::new())
        .bind(&event.name)
        .bind(&event.description)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(row.into())
    }

    async fn find_amenities(&self) -> AppResult<Vec<Amenity>> {
        let rows = sqlx::query_as::<_, AmenityRow>(
            r#"
                SELECT amenity_id, name, description
                FROM amenities
                ORDER BY name ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(rows.into_iter().map(Amenity::from).collect())
    }

    async fn find_room_amenities(&self, room_id: RoomId) -> AppResult<Vec<Amenity>> {
        let rows = sqlx::query_as::<_, AmenityRow>(
            r#"
                SELECT a.amenity_id, a.name, a.description
                FROM amenities AS a
                INNER JOIN room_amenities AS ra ON a.amenity_id = ra.amenity_id
                WHERE ra.room_id = $1
                ORDER BY a.name ASC
            "#,
        )
        .bind(room_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(rows.into_iter().map(Amenity::from).collect())
    }

    async fn delete_amenity(&self, amenity_id: AmenityId) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM amenities WHERE amenity_id = $1
            "#,
        )
        .bind(amenity_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "specified amenity not found".into(),
            ));
        }
        Ok(())
    }
}

impl RoomRepositoryImpl {
    // Mutations on a room and its beds are host-only.
    async fn fetch_for_owner_check(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        room_id: RoomId,
        requested_user: UserId,
    ) -> AppResult<Room> {
        let room: Room = sqlx::query_as::<_, RoomRow>(
            r#"
                SELECT
                    room_id, owner_id, name, country, city, price, rooms,
                    toilets, description, address, pet_friendly, kind,
                    category_id
                FROM rooms
                WHERE room_id = $1
            "#,
        )
        .bind(room_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| AppError::EntityNotFound(format!("room ({room_id}) was not found")))?
        .try_into()?;

        if !room.owned_by(requested_user) {
            return Err(AppError::ForbiddenOperation);
        }
        Ok(room)
    }
}

// Listing categories are partitioned by kind; a room may only point at a
// rooms-kind category.
pub(crate) async fn check_category_kind(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    category_id: CategoryId,
    expected: CategoryKind,
) -> AppResult<()> {
    let kind: Option<String> = sqlx::query_scalar(
        r#"
            SELECT kind FROM categories WHERE category_id = $1
        "#,
    )
    .bind(category_id)
    .fetch_optional(&mut **tx)
    .await
    .map_err(AppError::SpecificOperationError)?;

    match kind {
        None => Err(AppError::EntityNotFound(format!(
            "category ({category_id}) was not found"
        ))),
        Some(kind) if kind != expected.as_ref() => Err(AppError::UnprocessableEntity(format!(
            "the category is reserved for {kind} listings"
        ))),
        Some(_) => Ok(()),
    }
}

async fn replace_room_amenities(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    room_id: RoomId,
    amenities: &[AmenityId],
) -> AppResult<()> {
    sqlx::query(
        r#"
            DELETE FROM room_amenities WHERE room_id = $1
        "#,
    )
    .bind(room_id)
    .execute(&mut **tx)
    .await
    .map_err(AppError::SpecificOperationError)?;

    for amenity_id in amenities {
        sqlx::query(
            r#"
                INSERT INTO room_amenities (room_id, amenity_id)
                VALUES ($1, $2)
            "#,
        )
        .bind(room_id)
        .bind(amenity_id)
        .execute(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::room::RoomKind;

    async fn seed_host(db: &ConnectionPool) -> AppResult<UserId> {
        let user_id = UserId::new();
        sqlx::query(
            r#"
                INSERT INTO users (user_id, user_name, email, password_hash, is_host, role_name)
                VALUES ($1, 'host', $2, 'x', TRUE, 'User')
            "#,
        )
        .bind(user_id)
        .bind(format!("{user_id}@example.com"))
        .execute(db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(user_id)
    }

    fn sample_room(owner_id: UserId) -> CreateRoom {
        CreateRoom::new(
            owner_id,
            "Canal house".into(),
            "Netherlands".into(),
            "Amsterdam".into(),
            200,
            3,
            2,
            "A tall house".into(),
            "Herengracht 1".into(),
            false,
            RoomKind::EntirePlace,
            None,
            vec![],
        )
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn create_and_fetch_room(pg: sqlx::PgPool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pg);
        let repo = RoomRepositoryImpl::new(db.clone());
        let owner_id = seed_host(&db).await?;

        let created = repo.create(sample_room(owner_id)).await?;
        let fetched = repo.find_by_id(created.room_id).await?.unwrap();
        assert_eq!(fetched.name, "Canal house");
        assert_eq!(fetched.kind, RoomKind::EntirePlace);
        assert!(fetched.owned_by(owner_id));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn only_the_owner_may_update(pg: sqlx::PgPool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pg);
        let repo = RoomRepositoryImpl::new(db.clone());
        let owner_id = seed_host(&db).await?;
        let stranger = seed_host(&db).await?;

        let created = repo.create(sample_room(owner_id)).await?;
        let err = repo
            .update(UpdateRoom {
                room_id: created.room_id,
                requested_user: stranger,
                name: Some("Taken over".into()),
                country: None,
                city: None,
                price: None,
                rooms: None,
                toilets: None,
                description: None,
                address: None,
                pet_friendly: None,
                kind: None,
                category_id: None,
                amenities: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ForbiddenOperation));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn beds_filter_by_type(pg: sqlx::PgPool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pg);
        let repo = RoomRepositoryImpl::new(db.clone());
        let owner_id = seed_host(&db).await?;
        let room = repo.create(sample_room(owner_id)).await?;

        repo.add_bed(CreateBed::new(
            room.room_id,
            owner_id,
            "Bunk A".into(),
            "single".into(),
            1,
        ))
        .await?;
        repo.add_bed(CreateBed::new(
            room.room_id,
            owner_id,
            "Big one".into(),
            "double".into(),
            2,
        ))
        .await?;

        let all = repo.find_beds(room.room_id, None).await?;
        assert_eq!(all.len(), 2);
        let doubles = repo.find_beds(room.room_id, Some("double".into())).await?;
        assert_eq!(doubles.len(), 1);
        assert_eq!(doubles[0].capacity, 2);
        Ok(())
    }
}
