use kernel::model::{
    id::{AmenityId, BedId, CategoryId, RoomId, UserId},
    room::{Amenity, Bed, Room, RoomKind},
};
use shared::error::AppError;
use std::str::FromStr;

#[derive(sqlx::FromRow)]
pub struct RoomRow {
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
    pub kind: String,
    pub category_id: Option<CategoryId>,
}

impl TryFrom<RoomRow> for Room {
    type Error = AppError;

    fn try_from(value: RoomRow) -> Result<Self, Self::Error> {
        let RoomRow {
            room_id,
            owner_id,
            name,
            country,
            city,
            price,
            rooms,
            toilets,
            description,
            address,
            pet_friendly,
            kind,
            category_id,
        } = value;
        Ok(Room {
            room_id,
            owner_id,
            name,
            country,
            city,
            price,
            rooms,
            toilets,
            description,
            address,
            pet_friendly,
            kind: RoomKind::from_str(&kind)
                .map_err(|e| AppError::ConversionEntityError(e.to_string()))?,
            category_id,
        })
    }
}

#[derive(sqlx::FromRow)]
pub struct BedRow {
    pub bed_id: BedId,
    pub room_id: RoomId,
    pub name: String,
    pub bed_type: String,
    pub capacity: i32,
}

impl From<BedRow> for Bed {
    fn from(value: BedRow) -> Self {
        let BedRow {
            bed_id,
            room_id,
            name,
            bed_type,
            capacity,
        } = value;
        Bed {
            bed_id,
            room_id,
            name,
            bed_type,
            capacity,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct AmenityRow {
    pub amenity_id: AmenityId,
    pub name: String,
    pub description: Option<String>,
}

impl From<AmenityRow> for Amenity {
    fn from(value: AmenityRow) -> Self {
        let AmenityRow {
            amenity_id,
            name,
            description,
        } = value;
        Amenity {
            amenity_id,
            name,
            description,
        }
    }
}
