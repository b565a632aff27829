use actix_web::{HttpResponse, Result, web};

use crate::AppState;
use crate::database::models::{HackathonInput, UpdateHackathonInput};
use crate::handlers::shared::{SearchQuery, created, deleted, ok, ok_with_message};

pub async fn create_hackathon(
    state: web::Data<AppState>,
    input: web::Json<HackathonInput>,
) -> Result<HttpResponse> {
    let hackathon = state.hackathons.create(input.into_inner()).await?;

    Ok(created(hackathon, "Hackathon created successfully"))
}

pub async fn get_hackathons(state: web::Data<AppState>) -> Result<HttpResponse> {
    let hackathons = state.hackathons.list().await?;

    Ok(ok(hackathons))
}

pub async fn get_hackathon(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let hackathon = state.hackathons.get(path.into_inner()).await?;

    Ok(ok(hackathon))
}

pub async fn update_hackathon(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    input: web::Json<UpdateHackathonInput>,
) -> Result<HttpResponse> {
    let hackathon = state
        .hackathons
        .update(path.into_inner(), input.into_inner())
        .await?;

    Ok(ok_with_message(hackathon, "Hackathon updated successfully"))
}

pub async fn delete_hackathon(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    state.hackathons.delete(path.into_inner()).await?;

    Ok(deleted("Hackathon deleted successfully"))
}

pub async fn get_active_hackathons(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(ok(state.hackathons.active().await?))
}

pub async fn get_upcoming_hackathons(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(ok(state.hackathons.upcoming().await?))
}

pub async fn get_completed_hackathons(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(ok(state.hackathons.completed().await?))
}

pub async fn search_hackathons(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse> {
    let hackathons = state.hackathons.search(&query.q).await?;

    Ok(ok(hackathons))
}
