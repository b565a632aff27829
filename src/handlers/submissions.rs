use actix_web::{HttpResponse, Result, web};
use serde::Deserialize;

use crate::AppState;
use crate::database::models::{
    ScoreInput, SubmissionInput, SubmissionStatus, SubmissionStatusInput, UpdateSubmissionInput,
};
use crate::handlers::shared::{LimitQuery, created, deleted, ok, ok_with_message, parse_param};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamHackathonQuery {
    pub team_id: i64,
    pub hackathon_id: i64,
}

pub async fn create_submission(
    state: web::Data<AppState>,
    input: web::Json<SubmissionInput>,
) -> Result<HttpResponse> {
    let submission = state.submissions.submit(input.into_inner()).await?;

    Ok(created(submission, "Project submitted successfully"))
}

pub async fn get_submissions(state: web::Data<AppState>) -> Result<HttpResponse> {
    let submissions = state.submissions.list().await?;

    Ok(ok(submissions))
}

pub async fn get_submission(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let submission = state.submissions.get(path.into_inner()).await?;

    Ok(ok(submission))
}

pub async fn update_submission(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    input: web::Json<UpdateSubmissionInput>,
) -> Result<HttpResponse> {
    let submission = state
        .submissions
        .update(path.into_inner(), input.into_inner())
        .await?;

    Ok(ok_with_message(submission, "Submission updated successfully"))
}

pub async fn delete_submission(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    state.submissions.delete(path.into_inner()).await?;

    Ok(deleted("Submission deleted successfully"))
}

pub async fn get_submissions_by_team(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let submissions = state.submissions.list_by_team(path.into_inner()).await?;

    Ok(ok(submissions))
}

pub async fn get_submissions_by_hackathon(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let submissions = state
        .submissions
        .list_by_hackathon(path.into_inner())
        .await?;

    Ok(ok(submissions))
}

pub async fn get_submissions_by_status(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let status: SubmissionStatus = parse_param(&path.into_inner())?;
    let submissions = state.submissions.list_by_status(status).await?;

    Ok(ok(submissions))
}

pub async fn get_submissions_by_team_and_hackathon(
    state: web::Data<AppState>,
    query: web::Query<TeamHackathonQuery>,
) -> Result<HttpResponse> {
    let submissions = state
        .submissions
        .list_by_team_and_hackathon(query.team_id, query.hackathon_id)
        .await?;

    Ok(ok(submissions))
}

pub async fn get_top_submissions(
    state: web::Data<AppState>,
    query: web::Query<LimitQuery>,
) -> Result<HttpResponse> {
    let submissions = state.submissions.top(query.or_default()).await?;

    Ok(ok(submissions))
}

pub async fn score_submission(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    input: web::Json<ScoreInput>,
) -> Result<HttpResponse> {
    let submission = state
        .submissions
        .update_score(path.into_inner(), input.into_inner())
        .await?;

    Ok(ok_with_message(submission, "Score updated successfully"))
}

pub async fn update_submission_status(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    input: web::Json<SubmissionStatusInput>,
) -> Result<HttpResponse> {
    let submission = state
        .submissions
        .update_status(path.into_inner(), input.status)
        .await?;

    Ok(ok_with_message(submission, "Submission status updated successfully"))
}
