use crate::{
    extractor::AuthorizedUser,
    model::booking::{
        BookingPeriodQuery, BookingResponse, BookingsResponse, CreateExperienceBookingRequest,
        CreateStayBookingRequest, UpdateExperienceBookingRequest,
    },
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    booking::{
        event::{
            CreateBedBooking, CreateExperienceBooking, CreateRoomBooking, DeleteBooking,
            UpdateExperienceBooking,
        },
        BookingSubject,
    },
    id::{BedId, BookingId, ExperienceId, RoomId},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn book_room(
    user: AuthorizedUser,
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateStayBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingResponse>)> {
    req.validate(&())?;

    let booking = registry
        .booking_repository()
        .create_room_booking(CreateRoomBooking::new(
            room_id,
            user.id(),
            req.check_in,
            req.check_out,
            req.guests,
        ))
        .await?;
    Ok((StatusCode::CREATED, Json(booking.into())))
}

pub async fn book_bed(
    user: AuthorizedUser,
    Path((room_id, bed_id)): Path<(RoomId, BedId)>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateStayBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingResponse>)> {
    req.validate(&())?;

    let booking = registry
        .booking_repository()
        .create_bed_booking(CreateBedBooking::new(
            room_id,
            bed_id,
            user.id(),
            req.check_in,
            req.check_out,
            req.guests,
        ))
        .await?;
    Ok((StatusCode::CREATED, Json(booking.into())))
}

pub async fn book_experience(
    user: AuthorizedUser,
    Path(experience_id): Path<ExperienceId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateExperienceBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingResponse>)> {
    req.validate(&())?;

    let booking = registry
        .booking_repository()
        .create_experience_booking(CreateExperienceBooking::new(
            experience_id,
            user.id(),
            req.starts_at,
            req.guests,
        ))
        .await?;
    Ok((StatusCode::CREATED, Json(booking.into())))
}

pub async fn show_room_bookings(
    _user: AuthorizedUser,
    Path(room_id): Path<RoomId>,
    Query(query): Query<BookingPeriodQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    registry
        .booking_repository()
        .find_for_period(BookingSubject::Room(room_id), query.into())
        .await
        .map(BookingsResponse::from)
        .map(Json)
}

pub async fn show_bed_bookings(
    _user: AuthorizedUser,
    Path((_room_id, bed_id)): Path<(RoomId, BedId)>,
    Query(query): Query<BookingPeriodQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    registry
        .booking_repository()
        .find_for_period(BookingSubject::Bed(bed_id), query.into())
        .await
        .map(BookingsResponse::from)
        .map(Json)
}

pub async fn show_experience_bookings(
    _user: AuthorizedUser,
    Path(experience_id): Path<ExperienceId>,
    Query(query): Query<BookingPeriodQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingsResponse>> {
    registry
        .booking_repository()
        .find_for_period(BookingSubject::Experience(experience_id), query.into())
        .await
        .map(BookingsResponse::from)
        .map(Json)
}

pub async fn show_experience_booking(
    user: AuthorizedUser,
    Path((experience_id, booking_id)): Path<(ExperienceId, BookingId)>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingResponse>> {
    let booking = registry
        .booking_repository()
        .find_experience_booking(experience_id, booking_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("not found".into()))?;

    let experience = registry
        .experience_repository()
        .find_by_id(experience_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("not found".into()))?;

    BookingResponse::authorize_read(booking, user.id(), experience.host_id).map(Json)
}

pub async fn update_experience_booking(
    user: AuthorizedUser,
    Path((experience_id, booking_id)): Path<(ExperienceId, BookingId)>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateExperienceBookingRequest>,
) -> AppResult<Json<BookingResponse>> {
    req.validate(&())?;

    let booking = registry
        .booking_repository()
        .update_experience_booking(UpdateExperienceBooking::new(
            experience_id,
            booking_id,
            user.id(),
            req.starts_at,
            req.guests,
        ))
        .await?;
    Ok(Json(booking.into()))
}

pub async fn cancel_booking(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .booking_repository()
        .delete(DeleteBooking::new(booking_id, user.id()))
        .await
        .map(|_| StatusCode::NO_CONTENT)
}
