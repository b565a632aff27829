use sqlx::SqlitePool;

use crate::database::models::{Skill, SkillInput};
use crate::database::repositories::SkillRepository;
use crate::database::transaction::DatabaseTransaction;
use crate::error::AppError;
use crate::services::validation;

#[derive(Clone)]
pub struct SkillService {
    pool: SqlitePool,
    skills: SkillRepository,
}

impl SkillService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            skills: SkillRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn create(&self, input: SkillInput) -> Result<Skill, AppError> {
        validation::skill_name(&input.skill_name)?;
        let name = input.skill_name.trim().to_string();

        if self.skills.name_exists(&name).await? {
            log::warn!("Skill {} already exists", name);
            return Err(AppError::Conflict(format!("Skill '{}' already exists", name)));
        }

        let skills = self.skills.clone();
        let skill = DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move { Ok(skills.create(tx, &name).await?) })
        })
        .await?;

        log::info!("Created skill {} ({})", skill.id, skill.skill_name);
        Ok(skill)
    }

    pub async fn update(&self, id: i64, input: SkillInput) -> Result<Skill, AppError> {
        validation::skill_name(&input.skill_name)?;
        let name = input.skill_name.trim().to_string();

        let existing = self.get(id).await?;
        if existing.skill_name != name && self.skills.name_exists(&name).await? {
            return Err(AppError::Conflict(format!("Skill '{}' already exists", name)));
        }

        let skills = self.skills.clone();
        let skill = DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move {
                skills
                    .update(tx, id, &name)
                    .await?
                    .ok_or_else(|| AppError::not_found("Skill", id))
            })
        })
        .await?;

        log::info!("Renamed skill {} to {}", id, skill.skill_name);
        Ok(skill)
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let skills = self.skills.clone();
        let deleted = DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move { Ok(skills.delete(tx, id).await?) })
        })
        .await?;

        if !deleted {
            return Err(AppError::not_found("Skill", id));
        }

        log::info!("Deleted skill {}", id);
        Ok(())
    }

    pub async fn get(&self, id: i64) -> Result<Skill, AppError> {
        self.skills
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Skill", id))
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Skill, AppError> {
        self.skills
            .find_by_name(name.trim())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Skill not found with name: {}", name)))
    }

    pub async fn list(&self) -> Result<Vec<Skill>, AppError> {
        Ok(self.skills.find_all().await?)
    }

    pub async fn search(&self, term: &str) -> Result<Vec<Skill>, AppError> {
        Ok(self.skills.search_by_name(term.trim()).await?)
    }

    pub async fn name_exists(&self, name: &str) -> Result<bool, AppError> {
        Ok(self.skills.name_exists(name.trim()).await?)
    }

    /// The `limit` skills held by the most users.
    pub async fn popular(&self, limit: i64) -> Result<Vec<Skill>, AppError> {
        if limit <= 0 {
            return Err(AppError::ValidationFailed(
                "Limit must be a positive number".to_string(),
            ));
        }
        Ok(self.skills.find_popular(limit).await?)
    }
}
