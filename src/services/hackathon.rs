use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;

use crate::database::models::{HackathonInput, HackathonPhase, UpdateHackathonInput};
use crate::database::repositories::{HackathonRecord, HackathonRepository, UserRepository};
use crate::database::transaction::DatabaseTransaction;
use crate::dto::HackathonDto;
use crate::error::AppError;
use crate::services::validation;

#[derive(Clone)]
pub struct HackathonService {
    pool: SqlitePool,
    hackathons: HackathonRepository,
    users: UserRepository,
    default_max_team_size: i64,
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

impl HackathonService {
    pub fn new(pool: SqlitePool, default_max_team_size: i64) -> Self {
        Self {
            hackathons: HackathonRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            pool,
            default_max_team_size,
        }
    }

    fn validate(
        &self,
        title: &str,
        description: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        max_team_size: Option<i64>,
    ) -> Result<i64, AppError> {
        validation::hackathon_title(title)?;
        validation::required("Description", description)?;
        validation::date_order(start_date, end_date)?;

        let size = max_team_size.unwrap_or(self.default_max_team_size);
        validation::team_size(size)?;
        Ok(size)
    }

    pub async fn create(&self, input: HackathonInput) -> Result<HackathonDto, AppError> {
        let max_team_size = self.validate(
            &input.title,
            &input.description,
            input.start_date,
            input.end_date,
            input.max_team_size,
        )?;
        validation::positive_id("Creator ID", input.created_by)?;

        let title = input.title.trim().to_string();
        if self.hackathons.title_exists(&title).await? {
            log::warn!("Hackathon title {} is taken", title);
            return Err(AppError::Conflict(format!(
                "Hackathon '{}' already exists",
                title
            )));
        }
        if !self.users.exists_by_id(input.created_by).await? {
            return Err(AppError::not_found("User", input.created_by));
        }

        let hackathons = self.hackathons.clone();
        let hackathon = DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move {
                let record = HackathonRecord {
                    title: &title,
                    description: input.description.trim(),
                    start_date: input.start_date,
                    end_date: input.end_date,
                    max_team_size,
                };
                Ok(hackathons.create(tx, &record, input.created_by).await?)
            })
        })
        .await?;

        log::info!("Created hackathon {} ({})", hackathon.id, hackathon.title);
        Ok(HackathonDto::project(hackathon, today()))
    }

    pub async fn update(
        &self,
        id: i64,
        input: UpdateHackathonInput,
    ) -> Result<HackathonDto, AppError> {
        let max_team_size = self.validate(
            &input.title,
            &input.description,
            input.start_date,
            input.end_date,
            input.max_team_size,
        )?;

        let existing = self
            .hackathons
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Hackathon", id))?;

        let title = input.title.trim().to_string();
        if existing.title != title && self.hackathons.title_exists(&title).await? {
            return Err(AppError::Conflict(format!(
                "Hackathon '{}' already exists",
                title
            )));
        }

        let hackathons = self.hackathons.clone();
        let hackathon = DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move {
                let record = HackathonRecord {
                    title: &title,
                    description: input.description.trim(),
                    start_date: input.start_date,
                    end_date: input.end_date,
                    max_team_size,
                };
                hackathons
                    .update(tx, id, &record)
                    .await?
                    .ok_or_else(|| AppError::not_found("Hackathon", id))
            })
        })
        .await?;

        log::info!("Updated hackathon {}", id);
        Ok(HackathonDto::project(hackathon, today()))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let hackathons = self.hackathons.clone();
        let deleted = DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move { Ok(hackathons.delete(tx, id).await?) })
        })
        .await?;

        if !deleted {
            return Err(AppError::not_found("Hackathon", id));
        }

        log::info!("Deleted hackathon {}", id);
        Ok(())
    }

    pub async fn get(&self, id: i64) -> Result<HackathonDto, AppError> {
        self.hackathons
            .find_by_id(id)
            .await?
            .map(|h| HackathonDto::project(h, today()))
            .ok_or_else(|| AppError::not_found("Hackathon", id))
    }

    pub async fn get_by_title(&self, title: &str) -> Result<HackathonDto, AppError> {
        self.hackathons
            .find_by_title(title.trim())
            .await?
            .map(|h| HackathonDto::project(h, today()))
            .ok_or_else(|| AppError::NotFound(format!("Hackathon not found with title: {}", title)))
    }

    pub async fn phase(&self, id: i64) -> Result<HackathonPhase, AppError> {
        Ok(self.get(id).await?.phase)
    }

    pub async fn list(&self) -> Result<Vec<HackathonDto>, AppError> {
        let today = today();
        let rows = self.hackathons.find_all().await?;
        Ok(rows
            .into_iter()
            .map(|h| HackathonDto::project(h, today))
            .collect())
    }

    pub async fn search(&self, term: &str) -> Result<Vec<HackathonDto>, AppError> {
        let today = today();
        let rows = self.hackathons.search_by_title(term.trim()).await?;
        Ok(rows
            .into_iter()
            .map(|h| HackathonDto::project(h, today))
            .collect())
    }

    pub async fn upcoming(&self) -> Result<Vec<HackathonDto>, AppError> {
        let today = today();
        let rows = self.hackathons.find_upcoming(today).await?;
        Ok(rows
            .into_iter()
            .map(|h| HackathonDto::project(h, today))
            .collect())
    }

    pub async fn active(&self) -> Result<Vec<HackathonDto>, AppError> {
        let today = today();
        let rows = self.hackathons.find_active(today).await?;
        Ok(rows
            .into_iter()
            .map(|h| HackathonDto::project(h, today))
            .collect())
    }

    pub async fn completed(&self) -> Result<Vec<HackathonDto>, AppError> {
        let today = today();
        let rows = self.hackathons.find_completed(today).await?;
        Ok(rows
            .into_iter()
            .map(|h| HackathonDto::project(h, today))
            .collect())
    }

    pub async fn in_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<HackathonDto>, AppError> {
        validation::date_order(from, to)?;
        let today = today();
        let rows = self.hackathons.find_in_date_range(from, to).await?;
        Ok(rows
            .into_iter()
            .map(|h| HackathonDto::project(h, today))
            .collect())
    }
}
