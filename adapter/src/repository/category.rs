use crate::database::{model::category::CategoryRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        category::{event::CreateCategory, Category},
        id::CategoryId,
    },
    repository::category::CategoryRepository,
};
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct CategoryRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl CategoryRepository for CategoryRepositoryImpl {
    async fn create(&self, event: CreateCategory) -> AppResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
                INSERT INTO categories (category_id, name, kind)
                VALUES ($1, $2, $3)
                RETURNING category_id, name, kind
            "#,
        )
        .bind(CategoryId::new())
        .bind(&event.name)
        .bind(event.kind.as_ref())
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.try_into()
    }

    async fn find_all(&self) -> AppResult<Vec<Category>> {
        sqlx::query_as::<_, CategoryRow>(
            r#"
                SELECT category_id, name, kind
                FROM categories
                ORDER BY name ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .into_iter()
        .map(Category::try_from)
        .collect()
    }

    async fn find_by_id(&self, category_id: CategoryId) -> AppResult<Option<Category>> {
        sqlx::query_as::<_, CategoryRow>(
            r#"
                SELECT category_id, name, kind
                FROM categories
                WHERE category_id = $1
            "#,
        )
        .bind(category_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(Category::try_from)
        .transpose()
    }

    async fn delete(&self, category_id: CategoryId) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM categories WHERE category_id = $1
            "#,
        )
        .bind(category_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("category not found".into()));
        }
        Ok(())
    }
}
