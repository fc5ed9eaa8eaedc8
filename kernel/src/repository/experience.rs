use crate::model::{
    experience::{
        event::{CreateExperience, CreatePerk, DeleteExperience, UpdateExperience},
        Experience, Perk,
    },
    id::{ExperienceId, PerkId},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn create(&self, event: CreateExperience) -> AppResult<Experience>;
    async fn find_all(&self) -> AppResult<Vec<Experience>>;
    async fn find_by_id(&self, experience_id: ExperienceId) -> AppResult<Option<Experience>>;
    async fn update(&self, event: UpdateExperience) -> AppResult<Experience>;
    async fn delete(&self, event: DeleteExperience) -> AppResult<()>;

    async fn create_perk(&self, event: CreatePerk) -> AppResult<Perk>;
    async fn find_perks(&self) -> AppResult<Vec<Perk>>;
    async fn find_experience_perks(&self, experience_id: ExperienceId) -> AppResult<Vec<Perk>>;
    async fn delete_perk(&self, perk_id: PerkId) -> AppResult<()>;
}
