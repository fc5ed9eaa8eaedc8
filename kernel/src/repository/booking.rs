use crate::model::{
    booking::{
        event::{
            CreateBedBooking, CreateExperienceBooking, CreateRoomBooking, DeleteBooking,
            UpdateExperienceBooking,
        },
        Booking, BookingSubject,
    },
    id::{BookingId, ExperienceId},
    list::PeriodQuery,
};
use async_trait::async_trait;
use shared::error::AppResult;

/// Storage interface for the availability engine. Implementations must make
/// the conflict check and the insert atomic; a conflict discovered during
/// validation has to still hold at commit.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create_room_booking(&self, event: CreateRoomBooking) -> AppResult<Booking>;
    async fn create_bed_booking(&self, event: CreateBedBooking) -> AppResult<Booking>;
    async fn create_experience_booking(&self, event: CreateExperienceBooking)
        -> AppResult<Booking>;
    /// Re-runs schedule and conflict validation with the booking's own row
    /// excluded from the conflict set.
    async fn update_experience_booking(&self, event: UpdateExperienceBooking)
        -> AppResult<Booking>;
    async fn delete(&self, event: DeleteBooking) -> AppResult<()>;
    async fn find_experience_booking(
        &self,
        experience_id: ExperienceId,
        booking_id: BookingId,
    ) -> AppResult<Option<Booking>>;
    /// Calendar-month listing, chronological, fixed page size. The query must
    /// be validated before calling.
    async fn find_for_period(
        &self,
        subject: BookingSubject,
        query: PeriodQuery,
    ) -> AppResult<Vec<Booking>>;
}
