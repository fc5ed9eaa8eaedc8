use crate::model::experience::ExperienceSchedule;
use crate::model::id::{BedId, BookingId, ExperienceId, RoomId, UserId};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use derive_new::new;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct CreateRoomBooking {
    pub room_id: RoomId,
    pub booked_by: UserId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
}

#[derive(new)]
pub struct CreateBedBooking {
    pub room_id: RoomId,
    pub bed_id: BedId,
    pub booked_by: UserId,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: i32,
}

#[derive(new)]
pub struct CreateExperienceBooking {
    pub experience_id: ExperienceId,
    pub booked_by: UserId,
    pub starts_at: DateTime<Utc>,
    pub guests: i32,
}

#[derive(new)]
pub struct UpdateExperienceBooking {
    pub experience_id: ExperienceId,
    pub booking_id: BookingId,
    pub requested_user: UserId,
    pub starts_at: Option<DateTime<Utc>>,
    pub guests: Option<i32>,
}

#[derive(new)]
pub struct DeleteBooking {
    pub booking_id: BookingId,
    pub requested_user: UserId,
}

/// Date sanity for whole-night bookings: no past dates, and the stay must be
/// at least one night. Runs before anything touches storage.
pub fn validate_stay_dates(
    check_in: NaiveDate,
    check_out: NaiveDate,
    today: NaiveDate,
) -> AppResult<()> {
    if check_in < today {
        return Err(AppError::UnprocessableEntity(
            "check_in: can't book in the past".into(),
        ));
    }
    if check_out < today {
        return Err(AppError::UnprocessableEntity(
            "check_out: can't book in the past".into(),
        ));
    }
    if check_out <= check_in {
        return Err(AppError::UnprocessableEntity(
            "check_out: must be after check_in".into(),
        ));
    }
    Ok(())
}

impl CreateRoomBooking {
    pub fn validate(&self, today: NaiveDate) -> AppResult<()> {
        validate_stay_dates(self.check_in, self.check_out, today)
    }
}

impl CreateBedBooking {
    pub fn validate(&self, today: NaiveDate) -> AppResult<()> {
        validate_stay_dates(self.check_in, self.check_out, today)
    }

    pub fn validate_capacity(&self, capacity: i32) -> AppResult<()> {
        if self.guests > capacity {
            return Err(AppError::UnprocessableEntity(format!(
                "guests: guest count {} exceeds bed capacity {capacity}",
                self.guests
            )));
        }
        Ok(())
    }
}

/// Checks an experience slot against the listing's daily schedule window and
/// returns the derived slot end. The slot must start inside `[start, end)`,
/// stay on one calendar day and end no later than the window's end.
pub fn validate_slot(
    starts_at: DateTime<Utc>,
    now: DateTime<Utc>,
    schedule: &ExperienceSchedule,
) -> AppResult<DateTime<Utc>> {
    if starts_at <= now {
        return Err(AppError::UnprocessableEntity(
            "experience_time: can't book in the past".into(),
        ));
    }
    let start_time = starts_at.time();
    if start_time < schedule.start || start_time >= schedule.end {
        return Err(AppError::UnprocessableEntity(
            "experience_time: start time outside the experience schedule".into(),
        ));
    }
    let ends_at = starts_at + Duration::minutes(schedule.duration_minutes as i64);
    if ends_at.date_naive() != starts_at.date_naive() || ends_at.time() > schedule.end {
        return Err(AppError::UnprocessableEntity(
            "experience_time: slot exceeds the available schedule".into(),
        ));
    }
    Ok(ends_at)
}

impl CreateExperienceBooking {
    pub fn validate(
        &self,
        now: DateTime<Utc>,
        schedule: &ExperienceSchedule,
    ) -> AppResult<DateTime<Utc>> {
        validate_slot(self.starts_at, now, schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, TimeZone};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn nine_to_five() -> ExperienceSchedule {
        ExperienceSchedule {
            start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            duration_minutes: 60,
        }
    }

    #[test]
    fn future_stay_passes() {
        let today = date(2025, 6, 1);
        assert!(validate_stay_dates(date(2025, 6, 2), date(2025, 6, 4), today).is_ok());
        // a stay starting today is fine
        assert!(validate_stay_dates(today, date(2025, 6, 2), today).is_ok());
    }

    #[test]
    fn past_dates_are_rejected() {
        let today = date(2025, 6, 1);
        let err = validate_stay_dates(date(2025, 5, 30), date(2025, 6, 4), today).unwrap_err();
        assert!(err.to_string().contains("check_in"));
        let err = validate_stay_dates(date(2025, 6, 2), date(2025, 5, 30), today).unwrap_err();
        assert!(err.to_string().contains("check_out"));
    }

    #[test]
    fn zero_night_stay_is_rejected() {
        let today = date(2025, 6, 1);
        assert!(validate_stay_dates(date(2025, 6, 2), date(2025, 6, 2), today).is_err());
        assert!(validate_stay_dates(date(2025, 6, 4), date(2025, 6, 2), today).is_err());
    }

    #[test]
    fn slot_ending_at_window_end_is_accepted() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
        // 16:00 + 60min ends exactly at 17:00
        let starts_at = Utc.with_ymd_and_hms(2025, 6, 2, 16, 0, 0).unwrap();
        let ends_at = validate_slot(starts_at, now, &nine_to_five()).unwrap();
        assert_eq!(ends_at, Utc.with_ymd_and_hms(2025, 6, 2, 17, 0, 0).unwrap());
    }

    #[test]
    fn slot_spilling_past_window_end_is_rejected() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
        // 16:30 + 60min would end at 17:30
        let starts_at = Utc.with_ymd_and_hms(2025, 6, 2, 16, 30, 0).unwrap();
        assert!(validate_slot(starts_at, now, &nine_to_five()).is_err());
    }

    #[test]
    fn slot_before_window_start_is_rejected() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
        let starts_at = Utc.with_ymd_and_hms(2025, 6, 2, 8, 59, 0).unwrap();
        assert!(validate_slot(starts_at, now, &nine_to_five()).is_err());
    }

    #[test]
    fn slot_in_the_past_is_rejected() {
        let now = Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap();
        let starts_at = Utc.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap();
        let err = validate_slot(starts_at, now, &nine_to_five()).unwrap_err();
        assert!(err.to_string().contains("past"));
    }

    #[test]
    fn bed_capacity_is_enforced() {
        let event = CreateBedBooking::new(
            RoomId::new(),
            BedId::new(),
            UserId::new(),
            date(2025, 6, 2),
            date(2025, 6, 4),
            3,
        );
        assert!(event.validate_capacity(2).is_err());
        assert!(event.validate_capacity(3).is_ok());
    }
}
