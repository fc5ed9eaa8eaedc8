use chrono::{DateTime, Datelike, NaiveDate, Utc};
use garde::Validate;
use kernel::model::{
    booking::{BedSummary, Booking, BookingTarget},
    id::{BedId, BookingId, ExperienceId, RoomId, UserId},
    list::PeriodQuery,
};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStayBookingRequest {
    #[garde(skip)]
    pub check_in: NaiveDate,
    #[garde(skip)]
    pub check_out: NaiveDate,
    #[garde(range(min = 1))]
    pub guests: i32,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateExperienceBookingRequest {
    #[garde(skip)]
    pub starts_at: DateTime<Utc>,
    #[garde(range(min = 1))]
    pub guests: i32,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExperienceBookingRequest {
    #[garde(skip)]
    pub starts_at: Option<DateTime<Utc>>,
    #[garde(inner(range(min = 1)))]
    pub guests: Option<i32>,
}

/// Month window plus page number for booking listings; the window defaults
/// to the current month and `page` to the first page.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPeriodQuery {
    #[serde(default = "default_year")]
    pub year: i32,
    #[serde(default = "default_month")]
    pub month: u32,
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_year() -> i32 {
    Utc::now().year()
}

fn default_month() -> u32 {
    Utc::now().month()
}

fn default_page() -> i64 {
    1
}

impl From<BookingPeriodQuery> for PeriodQuery {
    fn from(value: BookingPeriodQuery) -> Self {
        let BookingPeriodQuery { year, month, page } = value;
        Self { year, month, page }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingsResponse {
    pub items: Vec<BookingResponse>,
}

impl From<Vec<Booking>> for BookingsResponse {
    fn from(value: Vec<Booking>) -> Self {
        Self {
            items: value.into_iter().map(BookingResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking_id: BookingId,
    pub booked_by: UserId,
    pub guests: i32,
    pub price: i32,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub target: BookingTargetResponse,
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BookingTargetResponse {
    #[serde(rename = "room")]
    Room {
        #[serde(rename = "roomId")]
        room_id: RoomId,
        #[serde(rename = "checkIn")]
        check_in: NaiveDate,
        #[serde(rename = "checkOut")]
        check_out: NaiveDate,
    },
    #[serde(rename = "bed")]
    Bed {
        #[serde(rename = "roomId")]
        room_id: RoomId,
        bed: BedSummaryResponse,
        #[serde(rename = "checkIn")]
        check_in: NaiveDate,
        #[serde(rename = "checkOut")]
        check_out: NaiveDate,
    },
    #[serde(rename = "experience")]
    Experience {
        #[serde(rename = "experienceId")]
        experience_id: ExperienceId,
        #[serde(rename = "startsAt")]
        starts_at: DateTime<Utc>,
        #[serde(rename = "endsAt")]
        ends_at: DateTime<Utc>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BedSummaryResponse {
    pub bed_id: BedId,
    pub name: String,
    pub bed_type: String,
}

impl From<BedSummary> for BedSummaryResponse {
    fn from(value: BedSummary) -> Self {
        let BedSummary {
            bed_id,
            name,
            bed_type,
        } = value;
        Self {
            bed_id,
            name,
            bed_type,
        }
    }
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            booking_id,
            booked_by,
            guests,
            price,
            created_at,
            target,
        } = value;
        let target = match target {
            BookingTarget::Room {
                room_id,
                check_in,
                check_out,
            } => BookingTargetResponse::Room {
                room_id,
                check_in,
                check_out,
            },
            BookingTarget::Bed {
                bed,
                room_id,
                check_in,
                check_out,
            } => BookingTargetResponse::Bed {
                room_id,
                bed: bed.into(),
                check_in,
                check_out,
            },
            BookingTarget::Experience {
                experience_id,
                starts_at,
                ends_at,
            } => BookingTargetResponse::Experience {
                experience_id,
                starts_at,
                ends_at,
            },
        };
        Self {
            booking_id,
            booked_by,
            guests,
            price,
            created_at,
            target,
        }
    }
}

impl BookingResponse {
    /// Guards booking detail responses against leaking other guests'
    /// bookings: only the guest or the listing host may read one.
    pub fn authorize_read(booking: Booking, user_id: UserId, host_id: UserId) -> AppResult<Self> {
        if !booking.owned_by(user_id) && user_id != host_id {
            return Err(AppError::ForbiddenOperation);
        }
        Ok(booking.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_response_carries_the_kind_tag() {
        let booking = Booking {
            booking_id: BookingId::new(),
            booked_by: UserId::new(),
            guests: 2,
            price: 100,
            created_at: Utc::now(),
            target: BookingTarget::Room {
                room_id: RoomId::new(),
                check_in: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
                check_out: NaiveDate::from_ymd_opt(2025, 7, 3).unwrap(),
            },
        };
        let json = serde_json::to_value(BookingResponse::from(booking)).unwrap();
        assert_eq!(json["kind"], "room");
        assert_eq!(json["checkIn"], "2025-07-01");
        assert!(json.get("startsAt").is_none());
    }

    #[test]
    fn period_query_defaults_to_the_current_month() {
        let query: BookingPeriodQuery = serde_json::from_str("{}").unwrap();
        let now = Utc::now();
        assert_eq!(query.year, now.year());
        assert_eq!(query.month, now.month());
        assert_eq!(query.page, 1);

        let query: BookingPeriodQuery =
            serde_json::from_str(r#"{"year": 2024, "month": 2, "page": 2}"#).unwrap();
        assert_eq!(query.year, 2024);
        assert_eq!(query.month, 2);
        assert_eq!(query.page, 2);
    }

    #[test]
    fn strangers_cannot_read_a_booking() {
        let guest = UserId::new();
        let host = UserId::new();
        let booking = Booking {
            booking_id: BookingId::new(),
            booked_by: guest,
            guests: 1,
            price: 50,
            created_at: Utc::now(),
            target: BookingTarget::Experience {
                experience_id: ExperienceId::new(),
                starts_at: Utc::now(),
                ends_at: Utc::now(),
            },
        };
        let res = BookingResponse::authorize_read(booking, UserId::new(), host);
        assert!(matches!(res, Err(AppError::ForbiddenOperation)));
    }
}
