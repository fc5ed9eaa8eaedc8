use strum::{AsRefStr, EnumIter, EnumString};

#[derive(Debug, PartialEq, Eq, Default, AsRefStr, EnumIter, EnumString)]
#[strum(serialize_all = "PascalCase")]
pub enum Role {
    Admin,
    #[default]
    User,
}
