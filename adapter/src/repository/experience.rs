use crate::database::{
    model::experience::{ExperienceRow, PerkRow},
    ConnectionPool,
};
use crate::repository::room::check_category_kind;
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    category::CategoryKind,
    experience::{
        event::{CreateExperience, CreatePerk, DeleteExperience, UpdateExperience},
        Experience, Perk,
    },
    id::{ExperienceId, PerkId, UserId},
};
use kernel::repository::experience::ExperienceRepository;
use shared::error::{AppError, AppResult};

const SELECT_EXPERIENCE: &str = r#"
    SELECT
        experience_id, host_id, name, country, city, price, description,
        address, schedule_start, schedule_end, duration_minutes, category_id
    FROM experiences
"#;

#[derive(new)]
pub struct ExperienceRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryImpl {
    async fn create(&self, event: CreateExperience) -> AppResult<Experience> {
        let mut tx = self.db.begin().await?;

        if let Some(category_id) = event.category_id {
            check_category_kind(&mut tx, category_id, CategoryKind::Experiences).await?;
        }

        let experience_id = ExperienceId::new();
        let row = sqlx::query_as::<_, ExperienceRow>(
            r#"
                INSERT INTO experiences
                (experience_id, host_id, name, country, city, price,
                 description, address, schedule_start, schedule_end,
                 duration_minutes, category_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
                RETURNING
                    experience_id, host_id, name, country, city, price,
                    description, address, schedule_start, schedule_end,
                    duration_minutes, category_id
            "#,
        )
        .bind(experience_id)
        .bind(event.host_id)
        .bind(&event.name)
        .bind(&event.country)
        .bind(&event.city)
        .bind(event.price)
        .bind(&event.description)
        .bind(&event.address)
        .bind(event.schedule.start)
        .bind(event.schedule.end)
        .bind(event.schedule.duration_minutes)
        .bind(event.category_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        replace_experience_perks(&mut tx, experience_id, &event.perks).await?;

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(row.into())
    }

    async fn find_all(&self) -> AppResult<Vec<Experience>> {
        let rows =
            sqlx::query_as::<_, ExperienceRow>(&format!("{SELECT_EXPERIENCE} ORDER BY name ASC"))
                .fetch_all(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;
        Ok(rows.into_iter().map(Experience::from).collect())
    }

    async fn find_by_id(&self, experience_id: ExperienceId) -> AppResult<Option<Experience>> {
        let row = sqlx::query_as::<_, ExperienceRow>(&format!(
            "{SELECT_EXPERIENCE} WHERE experience_id = $1"
        ))
        .bind(experience_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(row.map(Experience::from))
    }

    async fn update(&self, event: UpdateExperience) -> AppResult<Experience> {
        let mut tx = self.db.begin().await?;

        let current = self
            .fetch_for_host_check(&mut tx, event.experience_id, event.requested_user)
            .await?;
        let schedule = event.schedule.unwrap_or(current.schedule);

        if let Some(category_id) = event.category_id {
            check_category_kind(&mut tx, category_id, CategoryKind::Experiences).await?;
        }

        let row = sqlx::query_as::<_, ExperienceRow>(
            r#"
                UPDATE experiences
                SET name = $1, country = $2, city = $3, price = $4,
                    description = $5, address = $6, schedule_start = $7,
                    schedule_end = $8, duration_minutes = $9, category_id = $10
                WHERE experience_id = $11
                RETURNING
                    experience_id, host_id, name, country, city, price,
                    description, address, schedule_start, schedule_end,
                    duration_minutes, category_id
            "#,
        )
        .bind(event.name.unwrap_or(current.name))
        .bind(event.country.unwrap_or(current.country))
        .bind(event.city.unwrap_or(current.city))
        .bind(event.price.unwrap_or(current.price))
        .bind(event.description.unwrap_or(current.description))
        .bind(event.address.unwrap_or(current.address))
        .bind(schedule.start)
        .bind(schedule.end)
        .bind(schedule.duration_minutes)
        .bind(event.category_id.or(current.category_id))
        .bind(event.experience_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if let Some(perks) = event.perks {
            replace_experience_perks(&mut tx, event.experience_id, &perks).await?;
        }

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(row.into())
    }

    async fn delete(&self, event: DeleteExperience) -> AppResult<()> {
        let mut tx = self.db.begin().await?;
        self.fetch_for_host_check(&mut tx, event.experience_id, event.requested_user)
            .await?;

        let res = sqlx::query(
            r#"
                DELETE FROM experiences WHERE experience_id = $1
            "#,
        )
        .bind(event.experience_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "specified experience not found".into(),
            ));
        }
        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(())
    }

    async fn create_perk(&self, event: CreatePerk) -> AppResult<Perk> {
        let row = sqlx::query_as::<_, PerkRow>(
            r#"
                INSERT INTO perks (perk_id, name, details, explanation)
                VALUES ($1, $2, $3, $4)
                RETURNING perk_id, name, details, explanation
            "#,
        )
        .bind(PerkId::new())
        .bind(&event.name)
        .bind(&event.details)
        .bind(&event.explanation)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(row.into())
    }

    async fn find_perks(&self) -> AppResult<Vec<Perk>> {
        let rows = sqlx::query_as::<_, PerkRow>(
            r#"
                SELECT perk_id, name, details, explanation
                FROM perks
                ORDER BY name ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(rows.into_iter().map(Perk::from).collect())
    }

    async fn find_experience_perks(&self, experience_id: ExperienceId) -> AppResult<Vec<Perk>> {
        let rows = sqlx::query_as::<_, PerkRow>(
            r#"
                SELECT p.perk_id, p.name, p.details, p.explanation
                FROM perks AS p
                INNER JOIN experience_perks AS ep ON p.perk_id = ep.perk_id
                WHERE ep.experience_id = $1
                ORDER BY p.name ASC
            "#,
        )
        .bind(experience_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(rows.into_iter().map(Perk::from).collect())
    }

    async fn delete_perk(&self, perk_id: PerkId) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM perks WHERE perk_id = $1
            "#,
        )
        .bind(perk_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified perk not found".into()));
        }
        Ok(())
    }
}

impl ExperienceRepositoryImpl {
    async fn fetch_for_host_check(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        experience_id: ExperienceId,
        requested_user: UserId,
    ) -> AppResult<Experience> {
        let experience: Experience = sqlx::query_as::<_, ExperienceRow>(&format!(
            "{SELECT_EXPERIENCE} WHERE experience_id = $1"
        ))
        .bind(experience_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("experience ({experience_id}) was not found"))
        })?
        .into();

        if !experience.hosted_by(requested_user) {
            return Err(AppError::ForbiddenOperation);
        }
        Ok(experience)
    }
}

async fn replace_experience_perks(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    experience_id: ExperienceId,
    perks: &[PerkId],
) -> AppResult<()> {
    sqlx::query(
        r#"
            DELETE FROM experience_perks WHERE experience_id = $1
        "#,
    )
    .bind(experience_id)
    .execute(&mut **tx)
    .await
    .map_err(AppError::SpecificOperationError)?;

    for perk_id in perks {
        sqlx::query(
            r#"
                INSERT INTO experience_perks (experience_id, perk_id)
                VALUES ($1, $2)
            "#,
        )
        .bind(experience_id)
        .bind(perk_id)
        .execute(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use kernel::model::experience::ExperienceSchedule;

    async fn seed_host(db: &ConnectionPool) -> AppResult<UserId> {
        let user_id = UserId::new();
        sqlx::query(
            r#"
                INSERT INTO users (user_id, user_name, email, password_hash, is_host, role_name)
                VALUES ($1, 'host', $2, 'x', TRUE, 'User')
            "#,
        )
        .bind(user_id)
        .bind(format!("{user_id}@example.com"))
        .execute(db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        Ok(user_id)
    }

    fn nine_to_five() -> ExperienceSchedule {
        ExperienceSchedule {
            start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            duration_minutes: 60,
        }
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn create_keeps_the_schedule(pg: sqlx::PgPool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pg);
        let repo = ExperienceRepositoryImpl::new(db.clone());
        let host_id = seed_host(&db).await?;

        let created = repo
            .create(CreateExperience::new(
                host_id,
                "Pottery class".into(),
                "Japan".into(),
                "Kyoto".into(),
                45,
                "lesson".into(),
                "somewhere".into(),
                nine_to_five(),
                None,
                vec![],
            ))
            .await?;

        let fetched = repo.find_by_id(created.experience_id).await?.unwrap();
        assert_eq!(fetched.schedule.duration_minutes, 60);
        assert_eq!(
            fetched.schedule.end,
            NaiveTime::from_hms_opt(17, 0, 0).unwrap()
        );
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn perks_survive_the_junction(pg: sqlx::PgPool) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pg);
        let repo = ExperienceRepositoryImpl::new(db.clone());
        let host_id = seed_host(&db).await?;

        let perk = repo
            .create_perk(CreatePerk::new("Snacks".into(), None, None))
            .await?;
        let created = repo
            .create(CreateExperience::new(
                host_id,
                "City walk".into(),
                "Japan".into(),
                "Osaka".into(),
                20,
                "walk".into(),
                "meeting point".into(),
                nine_to_five(),
                None,
                vec![perk.perk_id],
            ))
            .await?;

        let perks = repo.find_experience_perks(created.experience_id).await?;
        assert_eq!(perks.len(), 1);
        assert_eq!(perks[0].name, "Snacks");
        Ok(())
    }
}
