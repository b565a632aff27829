use actix_web::{HttpResponse, Result, web};
use serde::Deserialize;

use crate::AppState;
use crate::database::models::{JoinRequestInput, JoinRequestStatus, JoinRequestStatusInput};
use crate::handlers::shared::{created, deleted, ok, ok_with_message, parse_param};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingCheckQuery {
    pub team_id: i64,
    pub user_id: i64,
}

pub async fn create_join_request(
    state: web::Data<AppState>,
    input: web::Json<JoinRequestInput>,
) -> Result<HttpResponse> {
    let request = state.join_requests.create(input.into_inner()).await?;

    Ok(created(request, "Join request created successfully"))
}

pub async fn get_join_requests(state: web::Data<AppState>) -> Result<HttpResponse> {
    let requests = state.join_requests.list().await?;

    Ok(ok(requests))
}

pub async fn get_join_request(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let request = state.join_requests.get(path.into_inner()).await?;

    Ok(ok(request))
}

pub async fn update_join_request(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    input: web::Json<JoinRequestStatusInput>,
) -> Result<HttpResponse> {
    let request = state
        .join_requests
        .update_status(path.into_inner(), input.status)
        .await?;

    Ok(ok_with_message(request, "Join request updated successfully"))
}

pub async fn delete_join_request(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    state.join_requests.delete(path.into_inner()).await?;

    Ok(deleted("Join request deleted successfully"))
}

pub async fn get_join_requests_by_team(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let requests = state.join_requests.list_by_team(path.into_inner()).await?;

    Ok(ok(requests))
}

pub async fn get_join_requests_by_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let requests = state.join_requests.list_by_user(path.into_inner()).await?;

    Ok(ok(requests))
}

pub async fn get_join_requests_by_status(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let status: JoinRequestStatus = parse_param(&path.into_inner())?;
    let requests = state.join_requests.list_by_status(status).await?;

    Ok(ok(requests))
}

pub async fn check_pending_request(
    state: web::Data<AppState>,
    query: web::Query<PendingCheckQuery>,
) -> Result<HttpResponse> {
    let pending = state
        .join_requests
        .has_pending(query.user_id, query.team_id)
        .await?;

    Ok(ok(pending))
}

pub async fn approve_join_request(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let request = state.join_requests.approve(path.into_inner()).await?;

    Ok(ok_with_message(request, "Join request approved successfully"))
}

pub async fn reject_join_request(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let request = state.join_requests.reject(path.into_inner()).await?;

    Ok(ok_with_message(request, "Join request rejected successfully"))
}
