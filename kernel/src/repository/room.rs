use crate::model::{
    id::{AmenityId, BedId, RoomId},
    room::{
        event::{CreateAmenity, CreateBed, CreateRoom, DeleteBed, DeleteRoom, UpdateBed, UpdateRoom},
        Amenity, Bed, Room,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn create(&self, event: CreateRoom) -> AppResult<Room>;
    async fn find_all(&self) -> AppResult<Vec<Room>>;
    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>>;
    async fn update(&self, event: UpdateRoom) -> AppResult<Room>;
    async fn delete(&self, event: DeleteRoom) -> AppResult<()>;

    async fn add_bed(&self, event: CreateBed) -> AppResult<Bed>;
    async fn find_beds(&self, room_id: RoomId, bed_type: Option<String>) -> AppResult<Vec<Bed>>;
    async fn find_bed(&self, room_id: RoomId, bed_id: BedId) -> AppResult<Option<Bed>>;
    async fn update_bed(&self, event: UpdateBed) -> AppResult<Bed>;
    async fn delete_bed(&self, event: DeleteBed) -> AppResult<()>;

    async fn create_amenity(&self, event: CreateAmenity) -> AppResult<Amenity>;
    async fn find_amenities(&self) -> AppResult<Vec<Amenity>>;
    async fn find_room_amenities(&self, room_id: RoomId) -> AppResult<Vec<Amenity>>;
    async fn delete_amenity(&self, amenity_id: AmenityId) -> AppResult<()>;
}
