use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{AmenityId, BedId, CategoryId, RoomId, UserId},
    room::{
        event::{CreateAmenity, CreateBed, CreateRoom, UpdateBed, UpdateRoom},
        Amenity, Bed, Room, RoomKind,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum RoomKindName {
    EntirePlace,
    PrivateRoom,
    SharedRoom,
}

impl From<RoomKindName> for RoomKind {
    fn from(value: RoomKindName) -> Self {
        match value {
            RoomKindName::EntirePlace => Self::EntirePlace,
            RoomKindName::PrivateRoom => Self::PrivateRoom,
            RoomKindName::SharedRoom => Self::SharedRoom,
        }
    }
}

impl From<RoomKind> for RoomKindName {
    fn from(value: RoomKind) -> Self {
        match value {
            RoomKind::EntirePlace => Self::EntirePlace,
            RoomKind::PrivateRoom => Self::PrivateRoom,
            RoomKind::SharedRoom => Self::SharedRoom,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(length(min = 1))]
    pub country: String,
    #[garde(length(min = 1))]
    pub city: String,
    #[garde(range(min = 0))]
    pub price: i32,
    #[garde(range(min = 1))]
    pub rooms: i32,
    #[garde(range(min = 0))]
    pub toilets: i32,
    #[garde(skip)]
    pub description: String,
    #[garde(length(min = 1))]
    pub address: String,
    #[garde(skip)]
    #[serde(default)]
    pub pet_friendly: bool,
    #[garde(skip)]
    pub kind: RoomKindName,
    #[garde(skip)]
    pub category_id: Option<CategoryId>,
    #[garde(skip)]
    #[serde(default)]
    pub amenities: Vec<AmenityId>,
}

#[derive(new)]
pub struct CreateRoomRequestWithOwner(UserId, CreateRoomRequest);

impl From<CreateRoomRequestWithOwner> for CreateRoom {
    fn from(value: CreateRoomRequestWithOwner) -> Self {
        let CreateRoomRequestWithOwner(
            owner_id,
            CreateRoomRequest {
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
                amenities,
            },
        ) = value;
        Self {
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
            kind: kind.into(),
            category_id,
            amenities,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomRequest {
    #[garde(inner(length(min = 1)))]
    pub name: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub country: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub city: Option<String>,
    #[garde(inner(range(min = 0)))]
    pub price: Option<i32>,
    #[garde(inner(range(min = 1)))]
    pub rooms: Option<i32>,
    #[garde(inner(range(min = 0)))]
    pub toilets: Option<i32>,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub address: Option<String>,
    #[garde(skip)]
    pub pet_friendly: Option<bool>,
    #[garde(skip)]
    pub kind: Option<RoomKindName>,
    #[garde(skip)]
    pub category_id: Option<CategoryId>,
    #[garde(skip)]
    pub amenities: Option<Vec<AmenityId>>,
}

#[derive(new)]
pub struct UpdateRoomRequestWithIds(RoomId, UserId, UpdateRoomRequest);

impl From<UpdateRoomRequestWithIds> for UpdateRoom {
    fn from(value: UpdateRoomRequestWithIds) -> Self {
        let UpdateRoomRequestWithIds(
            room_id,
            requested_user,
            UpdateRoomRequest {
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
                amenities,
            },
        ) = value;
        Self {
            room_id,
            requested_user,
            name,
            country,
            city,
            price,
            rooms,
            toilets,
            description,
            address,
            pet_friendly,
            kind: kind.map(RoomKind::from),
            category_id,
            amenities,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomsResponse {
    pub items: Vec<RoomResponse>,
}

impl From<Vec<Room>> for RoomsResponse {
    fn from(value: Vec<Room>) -> Self {
        Self {
            items: value.into_iter().map(RoomResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
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
    pub kind: RoomKindName,
    pub category_id: Option<CategoryId>,
}

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        let Room {
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
        Self {
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
            kind: kind.into(),
            category_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBedRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(length(min = 1))]
    pub bed_type: String,
    #[garde(range(min = 1))]
    pub capacity: i32,
}

#[derive(new)]
pub struct CreateBedRequestWithIds(RoomId, UserId, CreateBedRequest);

impl From<CreateBedRequestWithIds> for CreateBed {
    fn from(value: CreateBedRequestWithIds) -> Self {
        let CreateBedRequestWithIds(
            room_id,
            requested_user,
            CreateBedRequest {
                name,
                bed_type,
                capacity,
            },
        ) = value;
        Self {
            room_id,
            requested_user,
            name,
            bed_type,
            capacity,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBedRequest {
    #[garde(inner(length(min = 1)))]
    pub name: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub bed_type: Option<String>,
    #[garde(inner(range(min = 1)))]
    pub capacity: Option<i32>,
}

#[derive(new)]
pub struct UpdateBedRequestWithIds(RoomId, BedId, UserId, UpdateBedRequest);

impl From<UpdateBedRequestWithIds> for UpdateBed {
    fn from(value: UpdateBedRequestWithIds) -> Self {
        let UpdateBedRequestWithIds(
            room_id,
            bed_id,
            requested_user,
            UpdateBedRequest {
                name,
                bed_type,
                capacity,
            },
        ) = value;
        Self {
            room_id,
            bed_id,
            requested_user,
            name,
            bed_type,
            capacity,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BedsResponse {
    pub items: Vec<BedResponse>,
}

impl From<Vec<Bed>> for BedsResponse {
    fn from(value: Vec<Bed>) -> Self {
        Self {
            items: value.into_iter().map(BedResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BedResponse {
    pub bed_id: BedId,
    pub room_id: RoomId,
    pub name: String,
    pub bed_type: String,
    pub capacity: i32,
}

impl From<Bed> for BedResponse {
    fn from(value: Bed) -> Self {
        let Bed {
            bed_id,
            room_id,
            name,
            bed_type,
            capacity,
        } = value;
        Self {
            bed_id,
            room_id,
            name,
            bed_type,
            capacity,
        }
    }
}

/// Optional filter for the bed listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BedListQuery {
    pub bed_type: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAmenityRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(skip)]
    pub description: Option<String>,
}

impl From<CreateAmenityRequest> for CreateAmenity {
    fn from(value: CreateAmenityRequest) -> Self {
        let CreateAmenityRequest { name, description } = value;
        Self { name, description }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmenitiesResponse {
    pub items: Vec<AmenityResponse>,
}

impl From<Vec<Amenity>> for AmenitiesResponse {
    fn from(value: Vec<Amenity>) -> Self {
        Self {
            items: value.into_iter().map(AmenityResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmenityResponse {
    pub amenity_id: AmenityId,
    pub name: String,
    pub description: Option<String>,
}

impl From<Amenity> for AmenityResponse {
    fn from(value: Amenity) -> Self {
        let Amenity {
            amenity_id,
            name,
            description,
        } = value;
        Self {
            amenity_id,
            name,
            description,
        }
    }
}
