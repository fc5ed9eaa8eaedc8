pub mod event;

use crate::model::id::{AmenityId, BedId, CategoryId, RoomId, UserId};
use strum::{AsRefStr, EnumString};

#[derive(Debug)]
pub struct Room {
    pub room_id: RoomId,
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
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum RoomKind {
    EntirePlace,
    PrivateRoom,
    SharedRoom,
}

/// Bookable sub-unit of a room with its own capacity.
#[derive(Debug)]
pub struct Bed {
    pub bed_id: BedId,
    pub room_id: RoomId,
    pub name: String,
    pub bed_type: String,
    pub capacity: i32,
}

#[derive(Debug)]
pub struct Amenity {
    pub amenity_id: AmenityId,
    pub name: String,
    pub description: Option<String>,
}

impl Room {
    pub fn owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}
