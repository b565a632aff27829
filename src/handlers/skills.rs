use actix_web::{HttpResponse, Result, web};

use crate::AppState;
use crate::database::models::SkillInput;
use crate::handlers::shared::{
    LimitQuery, SearchQuery, created, deleted, ok, ok_with_message,
};

pub async fn create_skill(
    state: web::Data<AppState>,
    input: web::Json<SkillInput>,
) -> Result<HttpResponse> {
    let skill = state.skills.create(input.into_inner()).await?;

    Ok(created(skill, "Skill created successfully"))
}

pub async fn get_all_skills(state: web::Data<AppState>) -> Result<HttpResponse> {
    let skills = state.skills.list().await?;

    Ok(ok(skills))
}

pub async fn get_skill(state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse> {
    let skill = state.skills.get(path.into_inner()).await?;

    Ok(ok(skill))
}

pub async fn update_skill(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    input: web::Json<SkillInput>,
) -> Result<HttpResponse> {
    let skill = state
        .skills
        .update(path.into_inner(), input.into_inner())
        .await?;

    Ok(ok_with_message(skill, "Skill updated successfully"))
}

pub async fn delete_skill(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    state.skills.delete(path.into_inner()).await?;

    Ok(deleted("Skill deleted successfully"))
}

pub async fn search_skills(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse> {
    let skills = state.skills.search(&query.q).await?;

    Ok(ok(skills))
}

pub async fn get_popular_skills(
    state: web::Data<AppState>,
    query: web::Query<LimitQuery>,
) -> Result<HttpResponse> {
    let skills = state.skills.popular(query.or_default()).await?;

    Ok(ok(skills))
}
