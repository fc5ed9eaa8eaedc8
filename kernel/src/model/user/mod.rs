use crate::model::{id::UserId, role::Role};
use chrono::{DateTime, Utc};
pub mod event;

#[derive(Debug, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub is_host: bool,
    pub avatar_url: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct ListingHost {
    pub host_id: UserId,
    pub host_name: String,
}

#[derive(Debug)]
pub struct BookingUser {
    pub user_id: UserId,
    pub user_name: String,
}
