use crate::{
    extractor::AuthorizedUser,
    model::room::{
        AmenitiesResponse, AmenityResponse, BedListQuery, BedResponse, BedsResponse,
        CreateAmenityRequest, CreateBedRequest, CreateBedRequestWithIds, CreateRoomRequest,
        CreateRoomRequestWithOwner, RoomResponse, RoomsResponse, UpdateBedRequest,
        UpdateBedRequestWithIds, UpdateRoomRequest, UpdateRoomRequestWithIds,
    },
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    id::{AmenityId, BedId, RoomId},
    room::event::{DeleteBed, DeleteRoom},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_room(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateRoomRequest>,
) -> AppResult<(StatusCode, Json<RoomResponse>)> {
    if !user.is_host() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;

    let room = registry
        .room_repository()
        .create(CreateRoomRequestWithOwner::new(user.id(), req).into())
        .await?;
    Ok((StatusCode::CREATED, Json(room.into())))
}

pub async fn show_room_list(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomsResponse>> {
    registry
        .room_repository()
        .find_all()
        .await
        .map(RoomsResponse::from)
        .map(Json)
}

pub async fn show_room(
    _user: AuthorizedUser,
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomResponse>> {
    registry
        .room_repository()
        .find_by_id(room_id)
        .await
        .and_then(|room| match room {
            Some(room) => Ok(Json(room.into())),
            None => Err(AppError::EntityNotFound("not found".into())),
        })
}

pub async fn update_room(
    user: AuthorizedUser,
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateRoomRequest>,
) -> AppResult<Json<RoomResponse>> {
    req.validate(&())?;

    let room = registry
        .room_repository()
        .update(UpdateRoomRequestWithIds::new(room_id, user.id(), req).into())
        .await?;
    Ok(Json(room.into()))
}

pub async fn delete_room(
    user: AuthorizedUser,
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .room_repository()
        .delete(DeleteRoom::new(room_id, user.id()))
        .await
        .map(|_| StatusCode::NO_CONTENT)
}

pub async fn register_bed(
    user: AuthorizedUser,
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBedRequest>,
) -> AppResult<(StatusCode, Json<BedResponse>)> {
    req.validate(&())?;

    let bed = registry
        .room_repository()
        .add_bed(CreateBedRequestWithIds::new(room_id, user.id(), req).into())
        .await?;
    Ok((StatusCode::CREATED, Json(bed.into())))
}

pub async fn show_bed_list(
    _user: AuthorizedUser,
    Path(room_id): Path<RoomId>,
    Query(query): Query<BedListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BedsResponse>> {
    registry
        .room_repository()
        .find_beds(room_id, query.bed_type)
        .await
        .map(BedsResponse::from)
        .map(Json)
}

pub async fn show_bed(
    _user: AuthorizedUser,
    Path((room_id, bed_id)): Path<(RoomId, BedId)>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BedResponse>> {
    registry
        .room_repository()
        .find_bed(room_id, bed_id)
        .await
        .and_then(|bed| match bed {
            Some(bed) => Ok(Json(bed.into())),
            None => Err(AppError::EntityNotFound("not found".into())),
        })
}

pub async fn update_bed(
    user: AuthorizedUser,
    Path((room_id, bed_id)): Path<(RoomId, BedId)>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateBedRequest>,
) -> AppResult<Json<BedResponse>> {
    req.validate(&())?;

    let bed = registry
        .room_repository()
        .update_bed(UpdateBedRequestWithIds::new(room_id, bed_id, user.id(), req).into())
        .await?;
    Ok(Json(bed.into()))
}

pub async fn delete_bed(
    user: AuthorizedUser,
    Path((room_id, bed_id)): Path<(RoomId, BedId)>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .room_repository()
        .delete_bed(DeleteBed::new(room_id, bed_id, user.id()))
        .await
        .map(|_| StatusCode::NO_CONTENT)
}

pub async fn register_amenity(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateAmenityRequest>,
) -> AppResult<(StatusCode, Json<AmenityResponse>)> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;

    let amenity = registry
        .room_repository()
        .create_amenity(req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(amenity.into())))
}

pub async fn show_amenity_list(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AmenitiesResponse>> {
    registry
        .room_repository()
        .find_amenities()
        .await
        .map(AmenitiesResponse::from)
        .map(Json)
}

pub async fn show_room_amenities(
    _user: AuthorizedUser,
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AmenitiesResponse>> {
    registry
        .room_repository()
        .find_room_amenities(room_id)
        .await
        .map(AmenitiesResponse::from)
        .map(Json)
}

pub async fn delete_amenity(
    user: AuthorizedUser,
    Path(amenity_id): Path<AmenityId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    registry
        .room_repository()
        .delete_amenity(amenity_id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
}
