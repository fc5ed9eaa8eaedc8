pub mod auth;
pub mod booking;
pub mod media;
pub mod category;
pub mod experience;
pub mod message;
pub mod review;
pub mod room;
pub mod user;
pub mod wishlist;
