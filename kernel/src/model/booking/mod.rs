pub mod event;

use crate::model::id::{BedId, BookingId, ExperienceId, RoomId, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use shared::error::{AppError, AppResult};
use strum::{AsRefStr, EnumString};

#[derive(Debug)]
pub struct Booking {
    pub booking_id: BookingId,
    pub booked_by: UserId,
    pub guests: i32,
    /// Price of the listing captured when the booking is read back.
    pub price: i32,
    pub created_at: DateTime<Utc>,
    pub target: BookingTarget,
}

/// Tagged booking target. Room and bed bookings span whole nights as a
/// half-open date range `[check_in, check_out)`; experience bookings span a
/// half-open timestamp range `[starts_at, ends_at)`.
#[derive(Debug)]
pub enum BookingTarget {
    Room {
        room_id: RoomId,
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
    Bed {
        bed: BedSummary,
        room_id: RoomId,
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
    Experience {
        experience_id: ExperienceId,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    },
}

#[derive(Debug)]
pub struct BedSummary {
    pub bed_id: BedId,
    pub name: String,
    pub bed_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum BookingKind {
    Room,
    Bed,
    Experience,
}

/// What a period listing is scoped to.
#[derive(Debug, Clone, Copy)]
pub enum BookingSubject {
    Room(RoomId),
    Bed(BedId),
    Experience(ExperienceId),
}

impl Booking {
    pub fn owned_by(&self, user_id: UserId) -> bool {
        self.booked_by == user_id
    }
}

/// Half-open interval overlap: `[a_start, a_end)` and `[b_start, b_end)`
/// conflict iff `a_start < b_end && a_end > b_start`. Back-to-back ranges
/// do not overlap.
pub fn overlaps<T: PartialOrd>(a_start: T, a_end: T, b_start: T, b_end: T) -> bool {
    a_start < b_end && a_end > b_start
}

/// First and last day of a calendar month, both inclusive, matching the
/// `check_in >= first AND check_in <= last` period filter.
pub fn month_bounds(year: i32, month: u32) -> AppResult<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        AppError::UnprocessableEntity(format!("invalid year/month: {year}-{month}"))
    })?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    let last = next_first
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| AppError::UnprocessableEntity(format!("year out of range: {year}")))?;
    Ok((first, last))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlapping_ranges_conflict() {
        // existing [10, 20), request [15, 25)
        assert!(overlaps(10, 20, 15, 25));
        // request fully inside existing
        assert!(overlaps(10, 20, 12, 13));
        // existing fully inside request
        assert!(overlaps(12, 13, 10, 20));
    }

    #[test]
    fn adjacent_ranges_do_not_conflict() {
        // existing checkout == next check-in
        assert!(!overlaps(10, 20, 20, 30));
        assert!(!overlaps(20, 30, 10, 20));
        // disjoint
        assert!(!overlaps(10, 20, 21, 30));
    }

    #[test]
    fn month_bounds_covers_whole_month() {
        let (first, last) = month_bounds(2024, 1).unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());

        let (first, last) = month_bounds(2023, 12).unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2023, 12, 1).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
    }

    #[test]
    fn month_bounds_handles_leap_february() {
        let (_, last) = month_bounds(2024, 2).unwrap();
        assert_eq!(last, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let (_, last) = month_bounds(2023, 2).unwrap();
        assert_eq!(last, NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
    }

    #[test]
    fn month_bounds_rejects_invalid_month() {
        assert!(month_bounds(2024, 0).is_err());
        assert!(month_bounds(2024, 13).is_err());
    }
}
