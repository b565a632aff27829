use actix_web::{HttpResponse, Result, web};

use crate::AppState;
use crate::database::models::{TeamInput, UpdateTeamInput};
use crate::handlers::shared::{SearchQuery, created, deleted, ok, ok_with_message};

pub async fn create_team(
    state: web::Data<AppState>,
    input: web::Json<TeamInput>,
) -> Result<HttpResponse> {
    let team = state.teams.create(input.into_inner()).await?;

    Ok(created(team, "Team created successfully"))
}

pub async fn get_teams(state: web::Data<AppState>) -> Result<HttpResponse> {
    let teams = state.teams.list().await?;

    Ok(ok(teams))
}

pub async fn get_team(state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse> {
    let team = state.teams.get(path.into_inner()).await?;

    Ok(ok(team))
}

pub async fn update_team(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    input: web::Json<UpdateTeamInput>,
) -> Result<HttpResponse> {
    let team = state
        .teams
        .update(path.into_inner(), input.into_inner())
        .await?;

    Ok(ok_with_message(team, "Team updated successfully"))
}

pub async fn delete_team(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    state.teams.delete(path.into_inner()).await?;

    Ok(deleted("Team deleted successfully"))
}

pub async fn get_teams_by_hackathon(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let teams = state.teams.list_by_hackathon(path.into_inner()).await?;

    Ok(ok(teams))
}

pub async fn get_teams_by_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let teams = state.teams.list_by_member(path.into_inner()).await?;

    Ok(ok(teams))
}

pub async fn get_available_teams(state: web::Data<AppState>) -> Result<HttpResponse> {
    let teams = state.teams.with_available_spots().await?;

    Ok(ok(teams))
}

pub async fn search_teams(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse> {
    let teams = state.teams.search(&query.q).await?;

    Ok(ok(teams))
}
