use crate::{
    extractor::AuthorizedUser,
    model::experience::{
        CreateExperienceRequest, CreateExperienceRequestWithHost, CreatePerkRequest,
        ExperienceResponse, ExperiencesResponse, PerkResponse, PerksResponse,
        UpdateExperienceRequest, UpdateExperienceRequestWithIds,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    experience::event::DeleteExperience,
    id::{ExperienceId, PerkId},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_experience(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateExperienceRequest>,
) -> AppResult<(StatusCode, Json<ExperienceResponse>)> {
    if !user.is_host() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;

    let experience = registry
        .experience_repository()
        .create(CreateExperienceRequestWithHost::new(user.id(), req).into())
        .await?;
    Ok((StatusCode::CREATED, Json(experience.into())))
}

pub async fn show_experience_list(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ExperiencesResponse>> {
    registry
        .experience_repository()
        .find_all()
        .await
        .map(ExperiencesResponse::from)
        .map(Json)
}

pub async fn show_experience(
    _user: AuthorizedUser,
    Path(experience_id): Path<ExperienceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ExperienceResponse>> {
    registry
        .experience_repository()
        .find_by_id(experience_id)
        .await
        .and_then(|experience| match experience {
            Some(experience) => Ok(Json(experience.into())),
            None => Err(AppError::EntityNotFound("not found".into())),
        })
}

pub async fn update_experience(
    user: AuthorizedUser,
    Path(experience_id): Path<ExperienceId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateExperienceRequest>,
) -> AppResult<Json<ExperienceResponse>> {
    req.validate(&())?;

    let experience = registry
        .experience_repository()
        .update(UpdateExperienceRequestWithIds::new(experience_id, user.id(), req).into())
        .await?;
    Ok(Json(experience.into()))
}

pub async fn delete_experience(
    user: AuthorizedUser,
    Path(experience_id): Path<ExperienceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .experience_repository()
        .delete(DeleteExperience::new(experience_id, user.id()))
        .await
        .map(|_| StatusCode::NO_CONTENT)
}

pub async fn register_perk(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreatePerkRequest>,
) -> AppResult<(StatusCode, Json<PerkResponse>)> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;

    let perk = registry
        .experience_repository()
        .create_perk(req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(perk.into())))
}

pub async fn show_perk_list(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PerksResponse>> {
    registry
        .experience_repository()
        .find_perks()
        .await
        .map(PerksResponse::from)
        .map(Json)
}

pub async fn show_experience_perks(
    _user: AuthorizedUser,
    Path(experience_id): Path<ExperienceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PerksResponse>> {
    registry
        .experience_repository()
        .find_experience_perks(experience_id)
        .await
        .map(PerksResponse::from)
        .map(Json)
}

pub async fn delete_perk(
    user: AuthorizedUser,
    Path(perk_id): Path<PerkId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    registry
        .experience_repository()
        .delete_perk(perk_id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
}
