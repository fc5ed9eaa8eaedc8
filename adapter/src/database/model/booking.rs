use chrono::{DateTime, NaiveDate, Utc};
use kernel::model::{
    booking::{BedSummary, Booking, BookingKind, BookingTarget},
    id::{BedId, BookingId, ExperienceId, RoomId, UserId},
};
use shared::error::AppError;
use std::str::FromStr;

/// One row of the polymorphic bookings table, joined with the listing price
/// and the bed summary. Which of the nullable columns are set depends on
/// `kind`; `TryFrom` turns the row into the tagged domain type and treats a
/// mismatched shape as a conversion error.
#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub kind: String,
    pub user_id: UserId,
    pub room_id: Option<RoomId>,
    pub bed_id: Option<BedId>,
    pub experience_id: Option<ExperienceId>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub guests: i32,
    pub price: i32,
    pub bed_name: Option<String>,
    pub bed_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<BookingRow> for Booking {
    type Error = AppError;

    fn try_from(value: BookingRow) -> Result<Self, Self::Error> {
        let kind = BookingKind::from_str(&value.kind)
            .map_err(|e| AppError::ConversionEntityError(e.to_string()))?;
        let malformed = |field: &str| {
            AppError::ConversionEntityError(format!(
                "booking {} of kind {:?} is missing {field}",
                value.booking_id, kind
            ))
        };
        let target = match kind {
            BookingKind::Room => BookingTarget::Room {
                room_id: value.room_id.ok_or_else(|| malformed("room_id"))?,
                check_in: value.check_in.ok_or_else(|| malformed("check_in"))?,
                check_out: value.check_out.ok_or_else(|| malformed("check_out"))?,
            },
            BookingKind::Bed => BookingTarget::Bed {
                bed: BedSummary {
                    bed_id: value.bed_id.ok_or_else(|| malformed("bed_id"))?,
                    name: value.bed_name.clone().ok_or_else(|| malformed("bed_name"))?,
                    bed_type: value.bed_type.clone().ok_or_else(|| malformed("bed_type"))?,
                },
                room_id: value.room_id.ok_or_else(|| malformed("room_id"))?,
                check_in: value.check_in.ok_or_else(|| malformed("check_in"))?,
                check_out: value.check_out.ok_or_else(|| malformed("check_out"))?,
            },
            BookingKind::Experience => BookingTarget::Experience {
                experience_id: value
                    .experience_id
                    .ok_or_else(|| malformed("experience_id"))?,
                starts_at: value.starts_at.ok_or_else(|| malformed("starts_at"))?,
                ends_at: value.ends_at.ok_or_else(|| malformed("ends_at"))?,
            },
        };
        Ok(Booking {
            booking_id: value.booking_id,
            booked_by: value.user_id,
            guests: value.guests,
            price: value.price,
            created_at: value.created_at,
            target,
        })
    }
}

/// Owner information used for the delete authorization check.
#[derive(sqlx::FromRow)]
pub struct BookingOwnersRow {
    pub user_id: UserId,
    pub host_id: Option<UserId>,
}
