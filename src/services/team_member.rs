use sqlx::SqlitePool;

use crate::database::models::{TeamMemberInput, TeamMemberKey, TeamRole};
use crate::database::repositories::{
    HackathonRepository, TeamMemberRepository, TeamRepository, UserRepository,
};
use crate::database::transaction::DatabaseTransaction;
use crate::dto::TeamMemberDto;
use crate::error::AppError;
use crate::services::validation;

#[derive(Clone)]
pub struct TeamMemberService {
    pool: SqlitePool,
    members: TeamMemberRepository,
    teams: TeamRepository,
    hackathons: HackathonRepository,
    users: UserRepository,
}

impl TeamMemberService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            members: TeamMemberRepository::new(pool.clone()),
            teams: TeamRepository::new(pool.clone()),
            hackathons: HackathonRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn add(&self, input: TeamMemberInput) -> Result<TeamMemberDto, AppError> {
        validation::positive_id("Team ID", input.team_id)?;
        validation::positive_id("User ID", input.user_id)?;

        let team = self
            .teams
            .find_by_id(input.team_id)
            .await?
            .ok_or_else(|| AppError::not_found("Team", input.team_id))?;
        if !self.users.exists_by_id(input.user_id).await? {
            return Err(AppError::not_found("User", input.user_id));
        }

        let key = TeamMemberKey::new(input.team_id, input.user_id);
        if self.members.exists(key).await? {
            log::warn!("Membership {} already exists", key);
            return Err(AppError::Conflict(
                "User is already a member of this team".to_string(),
            ));
        }

        let hackathon = self
            .hackathons
            .find_by_id(team.hackathon_id)
            .await?
            .ok_or_else(|| AppError::not_found("Hackathon", team.hackathon_id))?;
        let members = self.members.count_for_team(team.id).await?;
        if members >= hackathon.max_team_size {
            log::warn!(
                "Team {} is full ({} of {} members)",
                team.id,
                members,
                hackathon.max_team_size
            );
            return Err(AppError::Conflict("Team is full".to_string()));
        }

        let repo = self.members.clone();
        let role = input.role_in_team;
        DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move { Ok(repo.create(tx, key, role).await?) })
        })
        .await?;

        log::info!("Added member {} as {}", key, role);
        self.get(key).await
    }

    pub async fn update_role(
        &self,
        key: TeamMemberKey,
        role: TeamRole,
    ) -> Result<TeamMemberDto, AppError> {
        let repo = self.members.clone();
        DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move {
                repo.update_role(tx, key, role)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("Team member not found for {}", key)))
            })
        })
        .await?;

        log::info!("Changed role of {} to {}", key, role);
        self.get(key).await
    }

    pub async fn remove(&self, key: TeamMemberKey) -> Result<(), AppError> {
        let repo = self.members.clone();
        let removed = DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move { Ok(repo.delete(tx, key).await?) })
        })
        .await?;

        if !removed {
            return Err(AppError::NotFound(format!(
                "Team member not found for {}",
                key
            )));
        }

        log::info!("Removed member {}", key);
        Ok(())
    }

    pub async fn get(&self, key: TeamMemberKey) -> Result<TeamMemberDto, AppError> {
        self.members
            .find_details_by_key(key)
            .await?
            .map(TeamMemberDto::from)
            .ok_or_else(|| AppError::NotFound(format!("Team member not found for {}", key)))
    }

    pub async fn list(&self) -> Result<Vec<TeamMemberDto>, AppError> {
        let rows = self.members.find_all_details().await?;
        Ok(rows.into_iter().map(TeamMemberDto::from).collect())
    }

    pub async fn list_by_team(&self, team_id: i64) -> Result<Vec<TeamMemberDto>, AppError> {
        let rows = self.members.find_by_team(team_id).await?;
        Ok(rows.into_iter().map(TeamMemberDto::from).collect())
    }

    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<TeamMemberDto>, AppError> {
        let rows = self.members.find_by_user(user_id).await?;
        Ok(rows.into_iter().map(TeamMemberDto::from).collect())
    }

    pub async fn list_by_team_and_role(
        &self,
        team_id: i64,
        role: TeamRole,
    ) -> Result<Vec<TeamMemberDto>, AppError> {
        let rows = self.members.find_by_team_and_role(team_id, role).await?;
        Ok(rows.into_iter().map(TeamMemberDto::from).collect())
    }

    pub async fn is_member(&self, key: TeamMemberKey) -> Result<bool, AppError> {
        Ok(self.members.exists(key).await?)
    }

    pub async fn count_for_team(&self, team_id: i64) -> Result<i64, AppError> {
        Ok(self.members.count_for_team(team_id).await?)
    }

    pub async fn count_for_user(&self, user_id: i64) -> Result<i64, AppError> {
        Ok(self.members.count_for_user(user_id).await?)
    }

    pub async fn remove_all_for_team(&self, team_id: i64) -> Result<u64, AppError> {
        let repo = self.members.clone();
        let removed = DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move { Ok(repo.delete_all_for_team(tx, team_id).await?) })
        })
        .await?;

        log::info!("Removed {} members from team {}", removed, team_id);
        Ok(removed)
    }

    pub async fn remove_all_for_user(&self, user_id: i64) -> Result<u64, AppError> {
        let repo = self.members.clone();
        let removed = DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move { Ok(repo.delete_all_for_user(tx, user_id).await?) })
        })
        .await?;

        log::info!("Removed user {} from {} teams", user_id, removed);
        Ok(removed)
    }
}
