use sqlx::SqlitePool;

use crate::database::models::{TeamInput, UpdateTeamInput};
use crate::database::repositories::{HackathonRepository, TeamRepository, UserRepository};
use crate::database::transaction::DatabaseTransaction;
use crate::dto::TeamDto;
use crate::error::AppError;
use crate::services::validation;

#[derive(Clone)]
pub struct TeamService {
    pool: SqlitePool,
    teams: TeamRepository,
    hackathons: HackathonRepository,
    users: UserRepository,
}

impl TeamService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            teams: TeamRepository::new(pool.clone()),
            hackathons: HackathonRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn create(&self, mut input: TeamInput) -> Result<TeamDto, AppError> {
        validation::team_name(&input.team_name)?;
        validation::positive_id("Hackathon ID", input.hackathon_id)?;
        validation::positive_id("Creator ID", input.created_by)?;
        input.team_name = input.team_name.trim().to_string();

        if self.teams.name_exists(&input.team_name).await? {
            log::warn!("Team name {} is taken", input.team_name);
            return Err(AppError::Conflict(format!(
                "Team '{}' already exists",
                input.team_name
            )));
        }
        if !self.hackathons.exists_by_id(input.hackathon_id).await? {
            return Err(AppError::not_found("Hackathon", input.hackathon_id));
        }
        if !self.users.exists_by_id(input.created_by).await? {
            return Err(AppError::not_found("User", input.created_by));
        }

        let teams = self.teams.clone();
        let team = DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move { Ok(teams.create(tx, &input).await?) })
        })
        .await?;

        log::info!(
            "Created team {} ({}) for hackathon {}",
            team.id,
            team.team_name,
            team.hackathon_id
        );
        self.get(team.id).await
    }

    pub async fn update(&self, id: i64, input: UpdateTeamInput) -> Result<TeamDto, AppError> {
        validation::team_name(&input.team_name)?;
        let name = input.team_name.trim().to_string();

        let existing = self
            .teams
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Team", id))?;

        if existing.team_name != name && self.teams.name_exists(&name).await? {
            return Err(AppError::Conflict(format!("Team '{}' already exists", name)));
        }

        let teams = self.teams.clone();
        DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move {
                teams
                    .update_name(tx, id, &name)
                    .await?
                    .ok_or_else(|| AppError::not_found("Team", id))
            })
        })
        .await?;

        log::info!("Renamed team {}", id);
        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let teams = self.teams.clone();
        let deleted = DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move { Ok(teams.delete(tx, id).await?) })
        })
        .await?;

        if !deleted {
            return Err(AppError::not_found("Team", id));
        }

        log::info!("Deleted team {}", id);
        Ok(())
    }

    pub async fn get(&self, id: i64) -> Result<TeamDto, AppError> {
        self.teams
            .find_details_by_id(id)
            .await?
            .map(TeamDto::from)
            .ok_or_else(|| AppError::not_found("Team", id))
    }

    pub async fn get_by_name(&self, name: &str) -> Result<TeamDto, AppError> {
        self.teams
            .find_details_by_name(name.trim())
            .await?
            .map(TeamDto::from)
            .ok_or_else(|| AppError::NotFound(format!("Team not found with name: {}", name)))
    }

    pub async fn list(&self) -> Result<Vec<TeamDto>, AppError> {
        let rows = self.teams.find_all_details().await?;
        Ok(rows.into_iter().map(TeamDto::from).collect())
    }

    pub async fn search(&self, term: &str) -> Result<Vec<TeamDto>, AppError> {
        let rows = self.teams.search_by_name(term.trim()).await?;
        Ok(rows.into_iter().map(TeamDto::from).collect())
    }

    pub async fn list_by_hackathon(&self, hackathon_id: i64) -> Result<Vec<TeamDto>, AppError> {
        let rows = self.teams.find_by_hackathon(hackathon_id).await?;
        Ok(rows.into_iter().map(TeamDto::from).collect())
    }

    pub async fn list_by_creator(&self, user_id: i64) -> Result<Vec<TeamDto>, AppError> {
        let rows = self.teams.find_by_creator(user_id).await?;
        Ok(rows.into_iter().map(TeamDto::from).collect())
    }

    pub async fn list_by_member(&self, user_id: i64) -> Result<Vec<TeamDto>, AppError> {
        let rows = self.teams.find_by_member(user_id).await?;
        Ok(rows.into_iter().map(TeamDto::from).collect())
    }

    pub async fn with_available_spots(&self) -> Result<Vec<TeamDto>, AppError> {
        let rows = self.teams.find_with_available_spots().await?;
        Ok(rows.into_iter().map(TeamDto::from).collect())
    }

    pub async fn member_count(&self, id: i64) -> Result<i64, AppError> {
        if !self.teams.exists_by_id(id).await? {
            return Err(AppError::not_found("Team", id));
        }
        Ok(self.teams.count_members(id).await?)
    }

    /// Seats left before the team reaches its hackathon's size cap.
    pub async fn available_spots(&self, id: i64) -> Result<i64, AppError> {
        let team = self
            .teams
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Team", id))?;
        let hackathon = self
            .hackathons
            .find_by_id(team.hackathon_id)
            .await?
            .ok_or_else(|| AppError::not_found("Hackathon", team.hackathon_id))?;
        let members = self.teams.count_members(id).await?;

        Ok((hackathon.max_team_size - members).max(0))
    }

    pub async fn is_full(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.available_spots(id).await? == 0)
    }
}
