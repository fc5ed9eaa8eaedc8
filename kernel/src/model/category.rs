use crate::model::id::CategoryId;
use strum::{AsRefStr, EnumString};

#[derive(Debug)]
pub struct Category {
    pub category_id: CategoryId,
    pub name: String,
    pub kind: CategoryKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum CategoryKind {
    Rooms,
    Experiences,
}

pub mod event {
    use super::CategoryKind;
    use derive_new::new;

    #[derive(new)]
    pub struct CreateCategory {
        pub name: String,
        pub kind: CategoryKind,
    }
}
