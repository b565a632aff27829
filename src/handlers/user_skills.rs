use actix_web::{HttpResponse, Result, web};
use serde::Deserialize;

use crate::AppState;
use crate::database::models::{
    ProficiencyLevel, UpdateUserSkillInput, UserSkillInput, UserSkillKey,
};
use crate::handlers::shared::{created, deleted, ok, ok_with_message, parse_param};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSkillCheckQuery {
    pub user_id: i64,
    pub skill_id: i64,
}

fn key(path: web::Path<(i64, i64)>) -> UserSkillKey {
    let (user_id, skill_id) = path.into_inner();
    UserSkillKey::new(user_id, skill_id)
}

pub async fn add_user_skill(
    state: web::Data<AppState>,
    input: web::Json<UserSkillInput>,
) -> Result<HttpResponse> {
    let user_skill = state.user_skills.add(input.into_inner()).await?;

    Ok(created(user_skill, "Skill added to user successfully"))
}

pub async fn get_all_user_skills(state: web::Data<AppState>) -> Result<HttpResponse> {
    let user_skills = state.user_skills.list().await?;

    Ok(ok(user_skills))
}

pub async fn get_user_skill(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse> {
    let user_skill = state.user_skills.get(key(path)).await?;

    Ok(ok(user_skill))
}

pub async fn update_user_skill(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64)>,
    input: web::Json<UpdateUserSkillInput>,
) -> Result<HttpResponse> {
    let user_skill = state
        .user_skills
        .update_proficiency(key(path), input.proficiency_level)
        .await?;

    Ok(ok_with_message(user_skill, "Proficiency updated successfully"))
}

pub async fn remove_user_skill(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse> {
    state.user_skills.remove(key(path)).await?;

    Ok(deleted("Skill removed from user successfully"))
}

pub async fn get_skills_for_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let user_skills = state.user_skills.list_by_user(path.into_inner()).await?;

    Ok(ok(user_skills))
}

pub async fn get_users_with_skill(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let user_skills = state.user_skills.list_by_skill(path.into_inner()).await?;

    Ok(ok(user_skills))
}

pub async fn get_user_skills_by_proficiency(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let level: ProficiencyLevel = parse_param(&path.into_inner())?;
    let user_skills = state.user_skills.list_by_proficiency(level).await?;

    Ok(ok(user_skills))
}

pub async fn check_user_skill(
    state: web::Data<AppState>,
    query: web::Query<UserSkillCheckQuery>,
) -> Result<HttpResponse> {
    let has_skill = state
        .user_skills
        .has_skill(UserSkillKey::new(query.user_id, query.skill_id))
        .await?;

    Ok(ok(has_skill))
}
