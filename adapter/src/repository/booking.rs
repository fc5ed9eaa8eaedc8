use crate::database::{
    model::booking::{BookingOwnersRow, BookingRow},
    ConnectionPool,
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use derive_new::new;
use kernel::model::{
    booking::{
        event::{
            validate_slot, CreateBedBooking, CreateExperienceBooking, CreateRoomBooking,
            DeleteBooking, UpdateExperienceBooking,
        },
        month_bounds, Booking, BookingSubject,
    },
    id::{BookingId, ExperienceId, RoomId},
    list::PeriodQuery,
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

// Shared row shape for every booking read. The joins pull in the listing
// price snapshot and the bed summary.
const SELECT_BOOKING: &str = r#"
    SELECT
        b.booking_id,
        b.kind,
        b.user_id,
        b.room_id,
        b.bed_id,
        b.experience_id,
        b.check_in,
        b.check_out,
        b.starts_at,
        b.ends_at,
        b.guests,
        COALESCE(r.price, e.price, 0) AS price,
        bd.name AS bed_name,
        bd.bed_type AS bed_type,
        b.created_at
    FROM bookings AS b
    LEFT JOIN rooms AS r ON b.room_id = r.room_id
    LEFT JOIN experiences AS e ON b.experience_id = e.experience_id
    LEFT JOIN beds AS bd ON b.bed_id = bd.bed_id
"#;

#[derive(sqlx::FromRow)]
struct ExperienceScheduleRow {
    host_id: kernel::model::id::UserId,
    schedule_start: chrono::NaiveTime,
    schedule_end: chrono::NaiveTime,
    duration_minutes: i32,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create_room_booking(&self, event: CreateRoomBooking) -> AppResult<Booking> {
        event.validate(Utc::now().date_naive())?;

        let mut tx = self.db.begin().await?;
        self.set_transaction_serializable(&mut tx).await?;

        // Pre-checks, all inside the serializable transaction so that the
        // verdict still holds at commit:
        // - the room must exist
        // - no whole-room booking may overlap the requested dates
        // - no bed booking on any bed of this room may overlap either
        {
            let room_exists: bool = sqlx::query_scalar(
                r#"
                    SELECT EXISTS (SELECT 1 FROM rooms WHERE room_id = $1)
                "#,
            )
            .bind(event.room_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if !room_exists {
                return Err(AppError::EntityNotFound(format!(
                    "room ({}) was not found",
                    event.room_id
                )));
            }

            self.check_room_conflicts(&mut tx, event.room_id, event.check_in, event.check_out)
                .await?;
        }

        let booking_id = BookingId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO bookings
                (booking_id, kind, user_id, room_id, check_in, check_out, guests)
                VALUES ($1, 'room', $2, $3, $4, $5, $6)
            "#,
        )
        .bind(booking_id)
        .bind(event.booked_by)
        .bind(event.room_id)
        .bind(event.check_in)
        .bind(event.check_out)
        .bind(event.guests)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no booking record has been created".into(),
            ));
        }

        let booking = self.fetch_in_tx(&mut tx, booking_id).await?;
        commit_booking_tx(tx).await?;

        Ok(booking)
    }

    async fn create_bed_booking(&self, event: CreateBedBooking) -> AppResult<Booking> {
        event.validate(Utc::now().date_naive())?;

        let mut tx = self.db.begin().await?;
        self.set_transaction_serializable(&mut tx).await?;

        {
            let capacity: Option<i32> = sqlx::query_scalar(
                r#"
                    SELECT capacity FROM beds WHERE bed_id = $1 AND room_id = $2
                "#,
            )
            .bind(event.bed_id)
            .bind(event.room_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            let capacity = capacity.ok_or_else(|| {
                AppError::EntityNotFound(format!("bed ({}) was not found", event.bed_id))
            })?;
            event.validate_capacity(capacity)?;

            // A whole-room booking blocks every bed in the room.
            let room_conflict: bool = sqlx::query_scalar(
                r#"
                    SELECT EXISTS (
                        SELECT 1 FROM bookings
                        WHERE room_id = $1
                          AND kind = 'room'
                          AND check_in < $3
                          AND check_out > $2
                    )
                "#,
            )
            .bind(event.room_id)
            .bind(event.check_in)
            .bind(event.check_out)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if room_conflict {
                return Err(AppError::BookingConflict(
                    "the whole room is booked for those dates".into(),
                ));
            }

            let bed_conflict: bool = sqlx::query_scalar(
                r#"
                    SELECT EXISTS (
                        SELECT 1 FROM bookings
                        WHERE bed_id = $1
                          AND kind = 'bed'
                          AND check_in < $3
                          AND check_out > $2
                    )
                "#,
            )
            .bind(event.bed_id)
            .bind(event.check_in)
            .bind(event.check_out)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if bed_conflict {
                return Err(AppError::BookingConflict(
                    "this bed is already booked for those dates".into(),
                ));
            }
        }

        let booking_id = BookingId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO bookings
                (booking_id, kind, user_id, room_id, bed_id, check_in, check_out, guests)
                VALUES ($1, 'bed', $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(booking_id)
        .bind(event.booked_by)
        .bind(event.room_id)
        .bind(event.bed_id)
        .bind(event.check_in)
        .bind(event.check_out)
        .bind(event.guests)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no booking record has been created".into(),
            ));
        }

        let booking = self.fetch_in_tx(&mut tx, booking_id).await?;
        commit_booking_tx(tx).await?;

        Ok(booking)
    }

    async fn create_experience_booking(
        &self,
        event: CreateExperienceBooking,
    ) -> AppResult<Booking> {
        let now = Utc::now();
        if event.starts_at <= now {
            return Err(AppError::UnprocessableEntity(
                "experience_time: can't book in the past".into(),
            ));
        }

        let mut tx = self.db.begin().await?;
        self.set_transaction_serializable(&mut tx).await?;

        let ends_at;
        {
            let experience = sqlx::query_as::<_, ExperienceScheduleRow>(
                r#"
                    SELECT host_id, schedule_start, schedule_end, duration_minutes
                    FROM experiences
                    WHERE experience_id = $1
                "#,
            )
            .bind(event.experience_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!(
                    "experience ({}) was not found",
                    event.experience_id
                ))
            })?;

            // Hosts cannot book their own experiences.
            if experience.host_id == event.booked_by {
                return Err(AppError::ForbiddenOperation);
            }

            let schedule = kernel::model::experience::ExperienceSchedule {
                start: experience.schedule_start,
                end: experience.schedule_end,
                duration_minutes: experience.duration_minutes,
            };
            ends_at = validate_slot(event.starts_at, now, &schedule)?;

            self.check_experience_conflicts(
                &mut tx,
                event.experience_id,
                event.starts_at,
                ends_at,
                None,
            )
            .await?;
        }

        let booking_id = BookingId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO bookings
                (booking_id, kind, user_id, experience_id, starts_at, ends_at, guests)
                VALUES ($1, 'experience', $2, $3, $4, $5, $6)
            "#,
        )
        .bind(booking_id)
        .bind(event.booked_by)
        .bind(event.experience_id)
        .bind(event.starts_at)
        .bind(ends_at)
        .bind(event.guests)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no booking record has been created".into(),
            ));
        }

        let booking = self.fetch_in_tx(&mut tx, booking_id).await?;
        commit_booking_tx(tx).await?;

        Ok(booking)
    }

    async fn update_experience_booking(
        &self,
        event: UpdateExperienceBooking,
    ) -> AppResult<Booking> {
        let mut tx = self.db.begin().await?;
        self.set_transaction_serializable(&mut tx).await?;

        let existing = sqlx::query_as::<_, BookingRow>(&format!(
            "{SELECT_BOOKING} WHERE b.booking_id = $1 AND b.experience_id = $2 AND b.kind = 'experience'"
        ))
        .bind(event.booking_id)
        .bind(event.experience_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("booking ({}) was not found", event.booking_id))
        })?;

        if existing.user_id != event.requested_user {
            return Err(AppError::ForbiddenOperation);
        }

        let guests = event.guests.unwrap_or(existing.guests);

        // Re-run the slot validation only when the start time changes; the
        // booking's own row is excluded from the conflict scan.
        let (starts_at, ends_at) = match event.starts_at {
            Some(new_start) => {
                let now = Utc::now();
                let experience = sqlx::query_as::<_, ExperienceScheduleRow>(
                    r#"
                        SELECT host_id, schedule_start, schedule_end, duration_minutes
                        FROM experiences
                        WHERE experience_id = $1
                    "#,
                )
                .bind(event.experience_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;

                let schedule = kernel::model::experience::ExperienceSchedule {
                    start: experience.schedule_start,
                    end: experience.schedule_end,
                    duration_minutes: experience.duration_minutes,
                };
                let new_end = validate_slot(new_start, now, &schedule)?;

                self.check_experience_conflicts(
                    &mut tx,
                    event.experience_id,
                    new_start,
                    new_end,
                    Some(event.booking_id),
                )
                .await?;

                (new_start, new_end)
            }
            None => {
                let starts_at = existing
                    .starts_at
                    .ok_or_else(|| AppError::ConversionEntityError("missing starts_at".into()))?;
                let ends_at = existing
                    .ends_at
                    .ok_or_else(|| AppError::ConversionEntityError("missing ends_at".into()))?;
                (starts_at, ends_at)
            }
        };

        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET starts_at = $1, ends_at = $2, guests = $3
                WHERE booking_id = $4
            "#,
        )
        .bind(starts_at)
        .bind(ends_at)
        .bind(guests)
        .bind(event.booking_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no booking record has been updated".into(),
            ));
        }

        let booking = self.fetch_in_tx(&mut tx, event.booking_id).await?;
        commit_booking_tx(tx).await?;

        Ok(booking)
    }

    async fn delete(&self, event: DeleteBooking) -> AppResult<()> {
        let owners = sqlx::query_as::<_, BookingOwnersRow>(
            r#"
                SELECT
                    b.user_id,
                    COALESCE(r.owner_id, e.host_id) AS host_id
                FROM bookings AS b
                LEFT JOIN rooms AS r ON b.room_id = r.room_id
                LEFT JOIN experiences AS e ON b.experience_id = e.experience_id
                WHERE b.booking_id = $1
            "#,
        )
        .bind(event.booking_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("booking ({}) was not found", event.booking_id))
        })?;

        // Only the guest who booked, or the listing's host, may cancel.
        let is_owner = owners.user_id == event.requested_user;
        let is_host = owners.host_id == Some(event.requested_user);
        if !is_owner && !is_host {
            return Err(AppError::ForbiddenOperation);
        }

        let res = sqlx::query(
            r#"
                DELETE FROM bookings WHERE booking_id = $1
            "#,
        )
        .bind(event.booking_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "specified booking not found".into(),
            ));
        }
        Ok(())
    }

    async fn find_experience_booking(
        &self,
        experience_id: ExperienceId,
        booking_id: BookingId,
    ) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, BookingRow>(&format!(
            "{SELECT_BOOKING} WHERE b.booking_id = $1 AND b.experience_id = $2 AND b.kind = 'experience'"
        ))
        .bind(booking_id)
        .bind(experience_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(Booking::try_from)
        .transpose()
    }

    async fn find_for_period(
        &self,
        subject: BookingSubject,
        query: PeriodQuery,
    ) -> AppResult<Vec<Booking>> {
        query.validate()?;
        let (first, last) = month_bounds(query.year, query.month)?;
        self.ensure_subject_exists(subject).await?;

        let rows = match subject {
            BookingSubject::Room(room_id) => {
                sqlx::query_as::<_, BookingRow>(&format!(
                    r#"{SELECT_BOOKING}
                        WHERE b.room_id = $1
                          AND b.kind = 'room'
                          AND b.check_in >= $2
                          AND b.check_in <= $3
                        ORDER BY b.check_in ASC
                        LIMIT $4 OFFSET $5
                    "#
                ))
                .bind(room_id)
                .bind(first)
                .bind(last)
                .bind(query.limit())
                .bind(query.offset())
                .fetch_all(self.db.inner_ref())
                .await
            }
            BookingSubject::Bed(bed_id) => {
                sqlx::query_as::<_, BookingRow>(&format!(
                    r#"{SELECT_BOOKING}
                        WHERE b.bed_id = $1
                          AND b.kind = 'bed'
                          AND b.check_in >= $2
                          AND b.check_in <= $3
                        ORDER BY b.check_in ASC
                        LIMIT $4 OFFSET $5
                    "#
                ))
                .bind(bed_id)
                .bind(first)
                .bind(last)
                .bind(query.limit())
                .bind(query.offset())
                .fetch_all(self.db.inner_ref())
                .await
            }
            BookingSubject::Experience(experience_id) => {
                sqlx::query_as::<_, BookingRow>(&format!(
                    r#"{SELECT_BOOKING}
                        WHERE b.experience_id = $1
                          AND b.kind = 'experience'
                          AND b.starts_at::date >= $2
                          AND b.starts_at::date <= $3
                        ORDER BY b.starts_at ASC
                        LIMIT $4 OFFSET $5
                    "#
                ))
                .bind(experience_id)
                .bind(first)
                .bind(last)
                .bind(query.limit())
                .bind(query.offset())
                .fetch_all(self.db.inner_ref())
                .await
            }
        }
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Booking::try_from).collect()
    }
}

impl BookingRepositoryImpl {
    async fn ensure_subject_exists(&self, subject: BookingSubject) -> AppResult<()> {
        let (sql, id) = match subject {
            BookingSubject::Room(room_id) => (
                "SELECT EXISTS (SELECT 1 FROM rooms WHERE room_id = $1)",
                room_id.raw(),
            ),
            BookingSubject::Bed(bed_id) => (
                "SELECT EXISTS (SELECT 1 FROM beds WHERE bed_id = $1)",
                bed_id.raw(),
            ),
            BookingSubject::Experience(experience_id) => (
                "SELECT EXISTS (SELECT 1 FROM experiences WHERE experience_id = $1)",
                experience_id.raw(),
            ),
        };
        let exists: bool = sqlx::query_scalar(sql)
            .bind(id)
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if !exists {
            return Err(AppError::EntityNotFound(
                "the listing for this booking query was not found".into(),
            ));
        }
        Ok(())
    }

    // The conflict scan and the insert must agree; SERIALIZABLE makes two
    // concurrent requests for the same interval fail on commit instead of
    // double-booking.
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }

    async fn check_room_conflicts(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        room_id: RoomId,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> AppResult<()> {
        // Half-open overlap: existing.check_in < new.check_out
        // AND existing.check_out > new.check_in
        let room_conflict: bool = sqlx::query_scalar(
            r#"
                SELECT EXISTS (
                    SELECT 1 FROM bookings
                    WHERE room_id = $1
                      AND kind = 'room'
                      AND check_in < $3
                      AND check_out > $2
                )
            "#,
        )
        .bind(room_id)
        .bind(check_in)
        .bind(check_out)
        .fetch_one(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if room_conflict {
            return Err(AppError::BookingConflict(
                "those dates are already taken for this room".into(),
            ));
        }

        let bed_conflict: bool = sqlx::query_scalar(
            r#"
                SELECT EXISTS (
                    SELECT 1 FROM bookings AS b
                    INNER JOIN beds AS bd ON b.bed_id = bd.bed_id
                    WHERE bd.room_id = $1
                      AND b.kind = 'bed'
                      AND b.check_in < $3
                      AND b.check_out > $2
                )
            "#,
        )
        .bind(room_id)
        .bind(check_in)
        .bind(check_out)
        .fetch_one(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if bed_conflict {
            return Err(AppError::BookingConflict(
                "some beds are already booked during those dates".into(),
            ));
        }
        Ok(())
    }

    async fn check_experience_conflicts(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        experience_id: ExperienceId,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
        exclude: Option<BookingId>,
    ) -> AppResult<()> {
        let conflict: bool = sqlx::query_scalar(
            r#"
                SELECT EXISTS (
                    SELECT 1 FROM bookings
                    WHERE experience_id = $1
                      AND kind = 'experience'
                      AND starts_at < $3
                      AND ends_at > $2
                      AND ($4::uuid IS NULL OR booking_id <> $4)
                )
            "#,
        )
        .bind(experience_id)
        .bind(starts_at)
        .bind(ends_at)
        .bind(exclude)
        .fetch_one(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if conflict {
            return Err(AppError::BookingConflict(
                "this slot is already booked".into(),
            ));
        }
        Ok(())
    }

    async fn fetch_in_tx(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        booking_id: BookingId,
    ) -> AppResult<Booking> {
        sqlx::query_as::<_, BookingRow>(&format!("{SELECT_BOOKING} WHERE b.booking_id = $1"))
            .bind(booking_id)
            .fetch_one(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?
            .try_into()
    }
}

/// A serialization failure on commit means another transaction booked the
/// same interval first; surface it as a conflict rather than a 500.
async fn commit_booking_tx(tx: sqlx::Transaction<'_, sqlx::Postgres>) -> AppResult<()> {
    tx.commit().await.map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.code().as_deref() == Some("40001") {
                return AppError::BookingConflict(
                    "a concurrent booking took those dates first".into(),
                );
            }
        }
        AppError::TransactionError(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use kernel::model::booking::{event::CreateRoomBooking, BookingTarget};
    use kernel::model::id::UserId;

    fn pool(pg: sqlx::PgPool) -> ConnectionPool {
        ConnectionPool::new(pg)
    }

    async fn seed_room(db: &ConnectionPool) -> AppResult<RoomId> {
        let room_id = RoomId::new();
        let owner_id = UserId::new();
        sqlx::query(
            r#"
                INSERT INTO users (user_id, user_name, email, password_hash, is_host, role_name)
                VALUES ($1, 'host', $2, 'x', TRUE, 'User')
            "#,
        )
        .bind(owner_id)
        .bind(format!("{owner_id}@example.com"))
        .execute(db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        sqlx::query(
            r#"
                INSERT INTO rooms
                (room_id, owner_id, name, country, city, price, rooms, toilets,
                 description, address, pet_friendly, kind)
                VALUES ($1, $2, 'Seaside loft', 'Korea', 'Seoul', 120, 2, 1,
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

    async fn seed_guest(db: &ConnectionPool) -> AppResult<UserId> {
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

    #[sqlx::test(migrations = "../migrations")]
    async fn booking_a_clear_calendar_succeeds(pg: sqlx::PgPool) -> anyhow::Result<()> {
        let db = pool(pg);
        let repo = BookingRepositoryImpl::new(db.clone());
        let room_id = seed_room(&db).await?;
        let guest = seed_guest(&db).await?;

        let today = Utc::now().date_naive();
        let booking = repo
            .create_room_booking(CreateRoomBooking::new(
                room_id,
                guest,
                today + Duration::days(1),
                today + Duration::days(3),
                2,
            ))
            .await?;

        assert_eq!(booking.guests, 2);
        assert_eq!(booking.price, 120);
        match booking.target {
            BookingTarget::Room { check_in, .. } => {
                assert_eq!(check_in, today + Duration::days(1));
            }
            other => panic!("expected a room booking, got {other:?}"),
        }
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn overlapping_room_booking_is_rejected(pg: sqlx::PgPool) -> anyhow::Result<()> {
        let db = pool(pg);
        let repo = BookingRepositoryImpl::new(db.clone());
        let room_id = seed_room(&db).await?;
        let first = seed_guest(&db).await?;
        let second = seed_guest(&db).await?;

        let today = Utc::now().date_naive();
        repo.create_room_booking(CreateRoomBooking::new(
            room_id,
            first,
            today + Duration::days(1),
            today + Duration::days(4),
            2,
        ))
        .await?;

        let err = repo
            .create_room_booking(CreateRoomBooking::new(
                room_id,
                second,
                today + Duration::days(3),
                today + Duration::days(5),
                1,
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BookingConflict(_)));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn back_to_back_room_bookings_are_allowed(pg: sqlx::PgPool) -> anyhow::Result<()> {
        let db = pool(pg);
        let repo = BookingRepositoryImpl::new(db.clone());
        let room_id = seed_room(&db).await?;
        let first = seed_guest(&db).await?;
        let second = seed_guest(&db).await?;

        let today = Utc::now().date_naive();
        repo.create_room_booking(CreateRoomBooking::new(
            room_id,
            first,
            today + Duration::days(1),
            today + Duration::days(3),
            2,
        ))
        .await?;

        // next guest checks in the day the first one checks out
        let booking = repo
            .create_room_booking(CreateRoomBooking::new(
                room_id,
                second,
                today + Duration::days(3),
                today + Duration::days(5),
                2,
            ))
            .await?;
        assert!(matches!(booking.target, BookingTarget::Room { .. }));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn concurrent_duplicate_bookings_cannot_both_commit(
        pg: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let db = pool(pg);
        let repo = BookingRepositoryImpl::new(db.clone());
        let room_id = seed_room(&db).await?;
        let first = seed_guest(&db).await?;
        let second = seed_guest(&db).await?;

        let today = Utc::now().date_naive();
        let check_in = today + Duration::days(1);
        let check_out = today + Duration::days(3);

        let (a, b) = tokio::join!(
            repo.create_room_booking(CreateRoomBooking::new(room_id, first, check_in, check_out, 2)),
            repo.create_room_booking(CreateRoomBooking::new(room_id, second, check_in, check_out, 2)),
        );

        assert_eq!([a.is_ok(), b.is_ok()].into_iter().filter(|ok| *ok).count(), 1);
        let err = if a.is_err() {
            a.unwrap_err()
        } else {
            b.unwrap_err()
        };
        assert!(matches!(err, AppError::BookingConflict(_)));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn past_check_in_never_reaches_the_database(pg: sqlx::PgPool) -> anyhow::Result<()> {
        let db = pool(pg);
        let repo = BookingRepositoryImpl::new(db);

        let today = Utc::now().date_naive();
        // the room id is bogus on purpose; date sanity fails first
        let err = repo
            .create_room_booking(CreateRoomBooking::new(
                RoomId::new(),
                UserId::new(),
                today - Duration::days(1),
                today + Duration::days(1),
                2,
            ))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
        Ok(())
    }
}
