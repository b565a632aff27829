use sqlx::SqlitePool;

use crate::database::models::{
    ScoreInput, SubmissionInput, SubmissionStatus, UpdateSubmissionInput, is_valid_score,
    MAX_SCORE, MIN_SCORE,
};
use crate::database::repositories::{HackathonRepository, SubmissionRepository, TeamRepository};
use crate::database::transaction::DatabaseTransaction;
use crate::dto::SubmissionDto;
use crate::error::AppError;
use crate::services::validation;

#[derive(Clone)]
pub struct SubmissionService {
    pool: SqlitePool,
    submissions: SubmissionRepository,
    teams: TeamRepository,
    hackathons: HackathonRepository,
}

fn check_score(score: f64) -> Result<(), AppError> {
    if !is_valid_score(score) {
        return Err(AppError::ValidationFailed(format!(
            "Score must be between {} and {}",
            MIN_SCORE, MAX_SCORE
        )));
    }
    Ok(())
}

impl SubmissionService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            submissions: SubmissionRepository::new(pool.clone()),
            teams: TeamRepository::new(pool.clone()),
            hackathons: HackathonRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn submit(&self, mut input: SubmissionInput) -> Result<SubmissionDto, AppError> {
        validation::required("Project title", &input.project_title)?;
        validation::required("Project description", &input.project_description)?;
        validation::positive_id("Team ID", input.team_id)?;
        validation::positive_id("Hackathon ID", input.hackathon_id)?;

        input.project_title = input.project_title.trim().to_string();
        input.project_description = input.project_description.trim().to_string();

        if !self.teams.exists_by_id(input.team_id).await? {
            return Err(AppError::not_found("Team", input.team_id));
        }
        if !self.hackathons.exists_by_id(input.hackathon_id).await? {
            return Err(AppError::not_found("Hackathon", input.hackathon_id));
        }
        if self
            .submissions
            .exists_for_team_and_hackathon(input.team_id, input.hackathon_id)
            .await?
        {
            log::warn!(
                "Team {} already submitted to hackathon {}",
                input.team_id,
                input.hackathon_id
            );
            return Err(AppError::Conflict(
                "Team has already submitted a project for this hackathon".to_string(),
            ));
        }

        let submissions = self.submissions.clone();
        let submission = DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move { Ok(submissions.create(tx, &input).await?) })
        })
        .await?;

        log::info!(
            "Team {} submitted project {} to hackathon {}",
            submission.team_id,
            submission.id,
            submission.hackathon_id
        );
        self.get(submission.id).await
    }

    pub async fn update(
        &self,
        id: i64,
        input: UpdateSubmissionInput,
    ) -> Result<SubmissionDto, AppError> {
        let mut submission = self
            .submissions
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Submission", id))?;

        if !submission.status.is_editable() {
            log::warn!("Submission {} is {} and can no longer be edited", id, submission.status);
            return Err(AppError::Conflict(format!(
                "Submission cannot be edited once it is {}",
                submission.status
            )));
        }

        input.apply_to(&mut submission);

        let submissions = self.submissions.clone();
        DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move {
                submissions
                    .update(tx, &submission)
                    .await?
                    .ok_or_else(|| AppError::not_found("Submission", id))
            })
        })
        .await?;

        log::info!("Updated submission {}", id);
        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let submission = self
            .submissions
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Submission", id))?;

        if !submission.status.is_editable() {
            return Err(AppError::Conflict(format!(
                "Submission cannot be deleted once it is {}",
                submission.status
            )));
        }

        let submissions = self.submissions.clone();
        let deleted = DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move { Ok(submissions.delete(tx, id).await?) })
        })
        .await?;

        if !deleted {
            return Err(AppError::not_found("Submission", id));
        }

        log::info!("Deleted submission {}", id);
        Ok(())
    }

    /// Judges may move a submission to any status.
    pub async fn update_status(
        &self,
        id: i64,
        status: SubmissionStatus,
    ) -> Result<SubmissionDto, AppError> {
        let submissions = self.submissions.clone();
        DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move {
                submissions
                    .update_status(tx, id, status)
                    .await?
                    .ok_or_else(|| AppError::not_found("Submission", id))
            })
        })
        .await?;

        log::info!("Submission {} is now {}", id, status);
        self.get(id).await
    }

    pub async fn update_score(&self, id: i64, input: ScoreInput) -> Result<SubmissionDto, AppError> {
        check_score(input.score)?;

        let submissions = self.submissions.clone();
        DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move {
                submissions
                    .update_score(tx, id, input.score, input.judge_comments.as_deref())
                    .await?
                    .ok_or_else(|| AppError::not_found("Submission", id))
            })
        })
        .await?;

        log::info!("Scored submission {}", id);
        self.get(id).await
    }

    pub async fn get(&self, id: i64) -> Result<SubmissionDto, AppError> {
        self.submissions
            .find_details_by_id(id)
            .await?
            .map(SubmissionDto::from)
            .ok_or_else(|| AppError::not_found("Submission", id))
    }

    pub async fn list(&self) -> Result<Vec<SubmissionDto>, AppError> {
        let rows = self.submissions.find_all_details().await?;
        Ok(rows.into_iter().map(SubmissionDto::from).collect())
    }

    pub async fn list_by_team(&self, team_id: i64) -> Result<Vec<SubmissionDto>, AppError> {
        let rows = self.submissions.find_by_team(team_id).await?;
        Ok(rows.into_iter().map(SubmissionDto::from).collect())
    }

    pub async fn list_by_hackathon(
        &self,
        hackathon_id: i64,
    ) -> Result<Vec<SubmissionDto>, AppError> {
        let rows = self.submissions.find_by_hackathon(hackathon_id).await?;
        Ok(rows.into_iter().map(SubmissionDto::from).collect())
    }

    pub async fn list_by_status(
        &self,
        status: SubmissionStatus,
    ) -> Result<Vec<SubmissionDto>, AppError> {
        let rows = self.submissions.find_by_status(status).await?;
        Ok(rows.into_iter().map(SubmissionDto::from).collect())
    }

    pub async fn list_by_team_and_hackathon(
        &self,
        team_id: i64,
        hackathon_id: i64,
    ) -> Result<Vec<SubmissionDto>, AppError> {
        let rows = self
            .submissions
            .find_by_team_and_hackathon(team_id, hackathon_id)
            .await?;
        Ok(rows.into_iter().map(SubmissionDto::from).collect())
    }

    pub async fn top(&self, limit: i64) -> Result<Vec<SubmissionDto>, AppError> {
        if limit <= 0 {
            return Err(AppError::ValidationFailed(
                "Limit must be a positive number".to_string(),
            ));
        }
        let rows = self.submissions.find_top(limit).await?;
        Ok(rows.into_iter().map(SubmissionDto::from).collect())
    }

    pub async fn search_by_title(&self, term: &str) -> Result<Vec<SubmissionDto>, AppError> {
        let rows = self.submissions.search_by_title(term.trim()).await?;
        Ok(rows.into_iter().map(SubmissionDto::from).collect())
    }

    pub async fn list_by_technology(
        &self,
        technology: &str,
    ) -> Result<Vec<SubmissionDto>, AppError> {
        let rows = self.submissions.find_by_technology(technology.trim()).await?;
        Ok(rows.into_iter().map(SubmissionDto::from).collect())
    }

    pub async fn list_by_score_range(
        &self,
        min: f64,
        max: f64,
    ) -> Result<Vec<SubmissionDto>, AppError> {
        check_score(min)?;
        check_score(max)?;
        if min > max {
            return Err(AppError::ValidationFailed(
                "Minimum score must not exceed maximum score".to_string(),
            ));
        }
        let rows = self.submissions.find_by_score_range(min, max).await?;
        Ok(rows.into_iter().map(SubmissionDto::from).collect())
    }

    pub async fn has_submitted(&self, team_id: i64, hackathon_id: i64) -> Result<bool, AppError> {
        Ok(self
            .submissions
            .exists_for_team_and_hackathon(team_id, hackathon_id)
            .await?)
    }
}
