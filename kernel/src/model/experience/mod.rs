pub mod event;

use crate::model::id::{CategoryId, ExperienceId, PerkId, UserId};
use chrono::NaiveTime;

#[derive(Debug)]
pub struct Experience {
    pub experience_id: ExperienceId,
    pub host_id: UserId,
    pub name: String,
    pub country: String,
    pub city: String,
    pub price: i32,
    pub description: String,
    pub address: String,
    pub schedule: ExperienceSchedule,
    pub category_id: Option<CategoryId>,
}

/// Daily window in which an experience can be booked. A slot must start and
/// end within `[start, end]` on a single calendar day.
#[derive(Debug, Clone, Copy)]
pub struct ExperienceSchedule {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub duration_minutes: i32,
}

#[derive(Debug)]
pub struct Perk {
    pub perk_id: PerkId,
    pub name: String,
    pub details: Option<String>,
    pub explanation: Option<String>,
}

impl Experience {
    pub fn hosted_by(&self, user_id: UserId) -> bool {
        self.host_id == user_id
    }
}
