use super::ExperienceSchedule;
use crate::model::id::{CategoryId, ExperienceId, PerkId, UserId};
use derive_new::new;

#[derive(new)]
pub struct CreateExperience {
    pub host_id: UserId,
    pub name: String,
    pub country: String,
    pub city: String,
    pub price: i32,
    pub description: String,
    pub address: String,
    pub schedule: ExperienceSchedule,
    pub category_id: Option<CategoryId>,
    pub perks: Vec<PerkId>,
}

#[derive(Debug)]
pub struct UpdateExperience {
    pub experience_id: ExperienceId,
    pub requested_user: UserId,
    pub name: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub price: Option<i32>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub schedule: Option<ExperienceSchedule>,
    pub category_id: Option<CategoryId>,
    pub perks: Option<Vec<PerkId>>,
}

#[derive(Debug, new)]
pub struct DeleteExperience {
    pub experience_id: ExperienceId,
    pub requested_user: UserId,
}

#[derive(new)]
pub struct CreatePerk {
    pub name: String,
    pub details: Option<String>,
    pub explanation: Option<String>,
}
