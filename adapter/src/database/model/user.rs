use chrono::{DateTime, Utc};
use kernel::model::{id::UserId, role::Role, user::User};
use shared::error::AppError;
use std::str::FromStr;

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub is_host: bool,
    pub avatar_url: Option<String>,
    pub role_name: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(value: UserRow) -> Result<Self, Self::Error> {
        let UserRow {
            user_id,
            user_name,
            email,
            is_host,
            avatar_url,
            role_name,
            created_at,
        } = value;
        Ok(User {
            user_id,
            user_name,
            email,
            is_host,
            avatar_url,
            role: Role::from_str(&role_name)
                .map_err(|e| AppError::ConversionEntityError(e.to_string()))?,
            created_at,
        })
    }
}
