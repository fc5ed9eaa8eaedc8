use super::RoomKind;
use crate::model::id::{AmenityId, BedId, CategoryId, RoomId, UserId};
use derive_new::new;

#[derive(new)]
pub struct CreateRoom {
    pub owner_id: UserId,
    pub name: String,
    pub country: String,
    pub city: String,
    pub price: i32,
    pub rooms: i32,
    pub toilets: i32,
    pub description: String,
    pub address: String,
    pub pet_friendly: bool,
    pub kind: RoomKind,
    pub category_id: Option<CategoryId>,
    pub amenities: Vec<AmenityId>,
}

#[derive(Debug)]
pub struct UpdateRoom {
    pub room_id: RoomId,
    pub requested_user: UserId,
    pub name: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub price: Option<i32>,
    pub rooms: Option<i32>,
    pub toilets: Option<i32>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub pet_friendly: Option<bool>,
    pub kind: Option<RoomKind>,
    pub category_id: Option<CategoryId>,
    pub amenities: Option<Vec<AmenityId>>,
}

#[derive(Debug, new)]
pub struct DeleteRoom {
    pub room_id: RoomId,
    pub requested_user: UserId,
}

#[derive(new)]
pub struct CreateBed {
    pub room_id: RoomId,
    pub requested_user: UserId,
    pub name: String,
    pub bed_type: String,
    pub capacity: i32,
}

#[derive(Debug)]
pub struct UpdateBed {
    pub room_id: RoomId,
    pub bed_id: BedId,
    pub requested_user: UserId,
    pub name: Option<String>,
    pub bed_type: Option<String>,
    pub capacity: Option<i32>,
}

#[derive(Debug, new)]
pub struct DeleteBed {
    pub room_id: RoomId,
    pub bed_id: BedId,
    pub requested_user: UserId,
}

#[derive(new)]
pub struct CreateAmenity {
    pub name: String,
    pub description: Option<String>,
}
