use chrono::NaiveTime;
use kernel::model::{
    experience::{Experience, ExperienceSchedule, Perk},
    id::{CategoryId, ExperienceId, PerkId, UserId},
};

#[derive(sqlx::FromRow)]
pub struct ExperienceRow {
    pub experience_id: ExperienceId,
    pub host_id: UserId,
    pub name: String,
    pub country: String,
    pub city: String,
    pub price: i32,
    pub description: String,
    pub address: String,
    pub schedule_start: NaiveTime,
    pub schedule_end: NaiveTime,
    pub duration_minutes: i32,
    pub category_id: Option<CategoryId>,
}

impl From<ExperienceRow> for Experience {
    fn from(value: ExperienceRow) -> Self {
        let ExperienceRow {
            experience_id,
            host_id,
            name,
            country,
            city,
            price,
            description,
            address,
            schedule_start,
            schedule_end,
            duration_minutes,
            category_id,
        } = value;
        Experience {
            experience_id,
            host_id,
            name,
            country,
            city,
            price,
            description,
            address,
            schedule: ExperienceSchedule {
                start: schedule_start,
                end: schedule_end,
                duration_minutes,
            },
            category_id,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct PerkRow {
    pub perk_id: PerkId,
    pub name: String,
    pub details: Option<String>,
    pub explanation: Option<String>,
}

impl From<PerkRow> for Perk {
    fn from(value: PerkRow) -> Self {
        let PerkRow {
            perk_id,
            name,
            details,
            explanation,
        } = value;
        Perk {
            perk_id,
            name,
            details,
            explanation,
        }
    }
}
