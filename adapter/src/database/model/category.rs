use kernel::model::{
    category::{Category, CategoryKind},
    id::CategoryId,
};
use shared::error::AppError;
use std::str::FromStr;

#[derive(sqlx::FromRow)]
pub struct CategoryRow {
    pub category_id: CategoryId,
    pub name: String,
    pub kind: String,
}

impl TryFrom<CategoryRow> for Category {
    type Error = AppError;

    fn try_from(value: CategoryRow) -> Result<Self, Self::Error> {
        let CategoryRow {
            category_id,
            name,
            kind,
        } = value;
        Ok(Category {
            category_id,
            name,
            kind: CategoryKind::from_str(&kind)
                .map_err(|e| AppError::ConversionEntityError(e.to_string()))?,
        })
    }
}
