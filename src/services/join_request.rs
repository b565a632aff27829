use sqlx::SqlitePool;

use crate::database::models::{JoinRequestInput, JoinRequestStatus};
use crate::database::repositories::{JoinRequestRepository, TeamRepository, UserRepository};
use crate::database::transaction::DatabaseTransaction;
use crate::dto::JoinRequestDto;
use crate::error::AppError;
use crate::services::validation;

#[derive(Clone)]
pub struct JoinRequestService {
    pool: SqlitePool,
    requests: JoinRequestRepository,
    teams: TeamRepository,
    users: UserRepository,
}

impl JoinRequestService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            requests: JoinRequestRepository::new(pool.clone()),
            teams: TeamRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn create(&self, input: JoinRequestInput) -> Result<JoinRequestDto, AppError> {
        validation::positive_id("Team ID", input.team_id)?;
        validation::positive_id("User ID", input.user_id)?;

        if !self.teams.exists_by_id(input.team_id).await? {
            return Err(AppError::not_found("Team", input.team_id));
        }
        if !self.users.exists_by_id(input.user_id).await? {
            return Err(AppError::not_found("User", input.user_id));
        }
        if self
            .requests
            .has_pending(input.user_id, input.team_id)
            .await?
        {
            log::warn!(
                "User {} already has a pending request for team {}",
                input.user_id,
                input.team_id
            );
            return Err(AppError::Conflict(
                "A pending join request already exists for this team".to_string(),
            ));
        }

        let requests = self.requests.clone();
        let request = DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move {
                Ok(requests
                    .create(tx, input.team_id, input.user_id)
                    .await?)
            })
        })
        .await?;

        log::info!(
            "User {} requested to join team {} (request {})",
            request.user_id,
            request.team_id,
            request.id
        );
        self.get(request.id).await
    }

    pub async fn approve(&self, id: i64) -> Result<JoinRequestDto, AppError> {
        self.update_status(id, JoinRequestStatus::Approved).await
    }

    pub async fn reject(&self, id: i64) -> Result<JoinRequestDto, AppError> {
        self.update_status(id, JoinRequestStatus::Rejected).await
    }

    /// Decides a request. Only PENDING requests move, and only to APPROVED or
    /// REJECTED. Approval does not add the user to the team.
    pub async fn update_status(
        &self,
        id: i64,
        next: JoinRequestStatus,
    ) -> Result<JoinRequestDto, AppError> {
        let current = self
            .requests
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Join request", id))?;

        if !current.status.can_transition_to(next) {
            log::warn!(
                "Join request {} cannot move from {} to {}",
                id,
                current.status,
                next
            );
            return Err(AppError::Conflict(format!(
                "Join request is already {}",
                current.status
            )));
        }

        let requests = self.requests.clone();
        let from = current.status;
        DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move {
                requests
                    .update_status(tx, id, from, next)
                    .await?
                    .ok_or_else(|| {
                        AppError::Conflict("Join request was decided concurrently".to_string())
                    })
            })
        })
        .await?;

        log::info!("Join request {} is now {}", id, next);
        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let requests = self.requests.clone();
        let deleted = DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move { Ok(requests.delete(tx, id).await?) })
        })
        .await?;

        if !deleted {
            return Err(AppError::not_found("Join request", id));
        }

        log::info!("Deleted join request {}", id);
        Ok(())
    }

    pub async fn get(&self, id: i64) -> Result<JoinRequestDto, AppError> {
        self.requests
            .find_details_by_id(id)
            .await?
            .map(JoinRequestDto::from)
            .ok_or_else(|| AppError::not_found("Join request", id))
    }

    pub async fn list(&self) -> Result<Vec<JoinRequestDto>, AppError> {
        let rows = self.requests.find_all_details().await?;
        Ok(rows.into_iter().map(JoinRequestDto::from).collect())
    }

    pub async fn list_by_team(&self, team_id: i64) -> Result<Vec<JoinRequestDto>, AppError> {
        let rows = self.requests.find_by_team(team_id).await?;
        Ok(rows.into_iter().map(JoinRequestDto::from).collect())
    }

    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<JoinRequestDto>, AppError> {
        let rows = self.requests.find_by_user(user_id).await?;
        Ok(rows.into_iter().map(JoinRequestDto::from).collect())
    }

    pub async fn list_by_status(
        &self,
        status: JoinRequestStatus,
    ) -> Result<Vec<JoinRequestDto>, AppError> {
        let rows = self.requests.find_by_status(status).await?;
        Ok(rows.into_iter().map(JoinRequestDto::from).collect())
    }

    pub async fn list_pending_for_team(
        &self,
        team_id: i64,
    ) -> Result<Vec<JoinRequestDto>, AppError> {
        let rows = self.requests.find_pending_by_team(team_id).await?;
        Ok(rows.into_iter().map(JoinRequestDto::from).collect())
    }

    pub async fn list_by_team_and_user(
        &self,
        team_id: i64,
        user_id: i64,
    ) -> Result<Vec<JoinRequestDto>, AppError> {
        let rows = self.requests.find_by_team_and_user(team_id, user_id).await?;
        Ok(rows.into_iter().map(JoinRequestDto::from).collect())
    }

    pub async fn pending_count_for_team(&self, team_id: i64) -> Result<i64, AppError> {
        Ok(self.requests.count_pending_for_team(team_id).await?)
    }

    pub async fn has_pending(&self, user_id: i64, team_id: i64) -> Result<bool, AppError> {
        Ok(self.requests.has_pending(user_id, team_id).await?)
    }

    pub async fn remove_all_for_team(&self, team_id: i64) -> Result<u64, AppError> {
        let requests = self.requests.clone();
        let removed = DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move { Ok(requests.delete_all_for_team(tx, team_id).await?) })
        })
        .await?;

        log::info!("Removed {} join requests for team {}", removed, team_id);
        Ok(removed)
    }

    pub async fn remove_all_for_user(&self, user_id: i64) -> Result<u64, AppError> {
        let requests = self.requests.clone();
        let removed = DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move { Ok(requests.delete_all_for_user(tx, user_id).await?) })
        })
        .await?;

        log::info!("Removed {} join requests by user {}", removed, user_id);
        Ok(removed)
    }
}
