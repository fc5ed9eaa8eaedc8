use crate::model::id::UserId;
use derive_new::new;

pub mod event {
    use super::*;

    #[derive(new)]
    pub struct CreateToken {
        pub user_id: UserId,
    }
}

/// Opaque bearer token handed out at login and stored in the kv store.
pub struct AccessToken(pub String);
