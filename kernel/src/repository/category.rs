use crate::model::{
    category::{event::CreateCategory, Category},
    id::CategoryId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, event: CreateCategory) -> AppResult<Category>;
    async fn find_all(&self) -> AppResult<Vec<Category>>;
    async fn find_by_id(&self, category_id: CategoryId) -> AppResult<Option<Category>>;
    async fn delete(&self, category_id: CategoryId) -> AppResult<()>;
}
