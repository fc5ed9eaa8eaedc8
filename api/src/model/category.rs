use garde::Validate;
use kernel::model::{
    category::{event::CreateCategory, Category, CategoryKind},
    id::CategoryId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKindName {
    Rooms,
    Experiences,
}

impl From<CategoryKindName> for CategoryKind {
    fn from(value: CategoryKindName) -> Self {
        match value {
            CategoryKindName::Rooms => Self::Rooms,
            CategoryKindName::Experiences => Self::Experiences,
        }
    }
}

impl From<CategoryKind> for CategoryKindName {
    fn from(value: CategoryKind) -> Self {
        match value {
            CategoryKind::Rooms => Self::Rooms,
            CategoryKind::Experiences => Self::Experiences,
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(skip)]
    pub kind: CategoryKindName,
}

impl From<CreateCategoryRequest> for CreateCategory {
    fn from(value: CreateCategoryRequest) -> Self {
        let CreateCategoryRequest { name, kind } = value;
        Self {
            name,
            kind: kind.into(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriesResponse {
    pub items: Vec<CategoryResponse>,
}

impl From<Vec<Category>> for CategoriesResponse {
    fn from(value: Vec<Category>) -> Self {
        Self {
            items: value.into_iter().map(CategoryResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub category_id: CategoryId,
    pub name: String,
    pub kind: CategoryKindName,
}

impl From<Category> for CategoryResponse {
    fn from(value: Category) -> Self {
        let Category {
            category_id,
            name,
            kind,
        } = value;
        Self {
            category_id,
            name,
            kind: kind.into(),
        }
    }
}
