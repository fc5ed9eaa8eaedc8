pub mod auth;
pub mod booking;
pub mod category;
pub mod experience;
pub mod health;
pub mod message;
pub mod room;
pub mod user;
pub mod v1;
pub mod wishlist;
