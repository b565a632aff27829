use actix_web::{HttpResponse, Result, web};
use serde::Deserialize;

use crate::AppState;
use crate::database::models::{TeamMemberInput, TeamMemberKey, UpdateTeamMemberInput};
use crate::handlers::shared::{created, deleted, ok, ok_with_message};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipQuery {
    pub team_id: i64,
    pub user_id: i64,
}

fn key(path: web::Path<(i64, i64)>) -> TeamMemberKey {
    let (team_id, user_id) = path.into_inner();
    TeamMemberKey::new(team_id, user_id)
}

pub async fn add_team_member(
    state: web::Data<AppState>,
    input: web::Json<TeamMemberInput>,
) -> Result<HttpResponse> {
    let member = state.team_members.add(input.into_inner()).await?;

    Ok(created(member, "Member added to team successfully"))
}

pub async fn get_team_members(state: web::Data<AppState>) -> Result<HttpResponse> {
    let members = state.team_members.list().await?;

    Ok(ok(members))
}

pub async fn get_team_member(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse> {
    let member = state.team_members.get(key(path)).await?;

    Ok(ok(member))
}

pub async fn update_team_member(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64)>,
    input: web::Json<UpdateTeamMemberInput>,
) -> Result<HttpResponse> {
    let member = state
        .team_members
        .update_role(key(path), input.role_in_team)
        .await?;

    Ok(ok_with_message(member, "Team member updated successfully"))
}

pub async fn remove_team_member(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse> {
    state.team_members.remove(key(path)).await?;

    Ok(deleted("Member removed from team successfully"))
}

pub async fn get_members_of_team(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let members = state.team_members.list_by_team(path.into_inner()).await?;

    Ok(ok(members))
}

pub async fn get_memberships_of_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let members = state.team_members.list_by_user(path.into_inner()).await?;

    Ok(ok(members))
}

pub async fn check_membership(
    state: web::Data<AppState>,
    query: web::Query<MembershipQuery>,
) -> Result<HttpResponse> {
    let is_member = state
        .team_members
        .is_member(TeamMemberKey::new(query.team_id, query.user_id))
        .await?;

    Ok(ok(is_member))
}
