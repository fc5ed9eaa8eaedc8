use chrono::NaiveTime;
use derive_new::new;
use garde::Validate;
use kernel::model::{
    experience::{
        event::{CreateExperience, CreatePerk, UpdateExperience},
        Experience, ExperienceSchedule, Perk,
    },
    id::{CategoryId, ExperienceId, PerkId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub duration_minutes: i32,
}

impl ScheduleRequest {
    fn validate_window(&self) -> garde::Result {
        if self.start >= self.end {
            return Err(garde::Error::new("start must be before end"));
        }
        if self.duration_minutes < 1 {
            return Err(garde::Error::new("durationMinutes must be positive"));
        }
        Ok(())
    }
}

impl From<ScheduleRequest> for ExperienceSchedule {
    fn from(value: ScheduleRequest) -> Self {
        let ScheduleRequest {
            start,
            end,
            duration_minutes,
        } = value;
        Self {
            start,
            end,
            duration_minutes,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateExperienceRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(length(min = 1))]
    pub country: String,
    #[garde(length(min = 1))]
    pub city: String,
    #[garde(range(min = 0))]
    pub price: i32,
    #[garde(skip)]
    pub description: String,
    #[garde(length(min = 1))]
    pub address: String,
    #[garde(custom(|s: &ScheduleRequest, _| s.validate_window()))]
    pub schedule: ScheduleRequest,
    #[garde(skip)]
    pub category_id: Option<CategoryId>,
    #[garde(skip)]
    #[serde(default)]
    pub perks: Vec<PerkId>,
}

#[derive(new)]
pub struct CreateExperienceRequestWithHost(UserId, CreateExperienceRequest);

impl From<CreateExperienceRequestWithHost> for CreateExperience {
    fn from(value: CreateExperienceRequestWithHost) -> Self {
        let CreateExperienceRequestWithHost(
            host_id,
            CreateExperienceRequest {
                name,
                country,
                city,
                price,
                description,
                address,
                schedule,
                category_id,
                perks,
            },
        ) = value;
        Self {
            host_id,
            name,
            country,
            city,
            price,
            description,
            address,
            schedule: schedule.into(),
            category_id,
            perks,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExperienceRequest {
    #[garde(inner(length(min = 1)))]
    pub name: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub country: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub city: Option<String>,
    #[garde(inner(range(min = 0)))]
    pub price: Option<i32>,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub address: Option<String>,
    #[garde(inner(custom(|s: &ScheduleRequest, _| s.validate_window())))]
    pub schedule: Option<ScheduleRequest>,
    #[garde(skip)]
    pub category_id: Option<CategoryId>,
    #[garde(skip)]
    pub perks: Option<Vec<PerkId>>,
}

#[derive(new)]
pub struct UpdateExperienceRequestWithIds(ExperienceId, UserId, UpdateExperienceRequest);

impl From<UpdateExperienceRequestWithIds> for UpdateExperience {
    fn from(value: UpdateExperienceRequestWithIds) -> Self {
        let UpdateExperienceRequestWithIds(
            experience_id,
            requested_user,
            UpdateExperienceRequest {
                name,
                country,
                city,
                price,
                description,
                address,
                schedule,
                category_id,
                perks,
            },
        ) = value;
        Self {
            experience_id,
            requested_user,
            name,
            country,
            city,
            price,
            description,
            address,
            schedule: schedule.map(ExperienceSchedule::from),
            category_id,
            perks,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperiencesResponse {
    pub items: Vec<ExperienceResponse>,
}

impl From<Vec<Experience>> for ExperiencesResponse {
    fn from(value: Vec<Experience>) -> Self {
        Self {
            items: value.into_iter().map(ExperienceResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceResponse {
    pub experience_id: ExperienceId,
    pub host_id: UserId,
    pub name: String,
    pub country: String,
    pub city: String,
    pub price: i32,
    pub description: String,
    pub address: String,
    pub schedule: ScheduleRequest,
    pub category_id: Option<CategoryId>,
}

impl From<Experience> for ExperienceResponse {
    fn from(value: Experience) -> Self {
        let Experience {
            experience_id,
            host_id,
            name,
            country,
            city,
            price,
            description,
            address,
            schedule,
            category_id,
        } = value;
        Self {
            experience_id,
            host_id,
            name,
            country,
            city,
            price,
            description,
            address,
            schedule: ScheduleRequest {
                start: schedule.start,
                end: schedule.end,
                duration_minutes: schedule.duration_minutes,
            },
            category_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePerkRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(skip)]
    pub details: Option<String>,
    #[garde(skip)]
    pub explanation: Option<String>,
}

impl From<CreatePerkRequest> for CreatePerk {
    fn from(value: CreatePerkRequest) -> Self {
        let CreatePerkRequest {
            name,
            details,
            explanation,
        } = value;
        Self {
            name,
            details,
            explanation,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerksResponse {
    pub items: Vec<PerkResponse>,
}

impl From<Vec<Perk>> for PerksResponse {
    fn from(value: Vec<Perk>) -> Self {
        Self {
            items: value.into_iter().map(PerkResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerkResponse {
    pub perk_id: PerkId,
    pub name: String,
    pub details: Option<String>,
    pub explanation: Option<String>,
}

impl From<Perk> for PerkResponse {
    fn from(value: Perk) -> Self {
        let Perk {
            perk_id,
            name,
            details,
            explanation,
        } = value;
        Self {
            perk_id,
            name,
            details,
            explanation,
        }
    }
}
