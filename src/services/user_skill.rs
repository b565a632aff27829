use sqlx::SqlitePool;

use crate::database::models::{ProficiencyLevel, UserSkillInput, UserSkillKey};
use crate::database::repositories::{SkillRepository, UserRepository, UserSkillRepository};
use crate::database::transaction::DatabaseTransaction;
use crate::dto::UserSkillDto;
use crate::error::AppError;
use crate::services::validation;

#[derive(Clone)]
pub struct UserSkillService {
    pool: SqlitePool,
    user_skills: UserSkillRepository,
    users: UserRepository,
    skills: SkillRepository,
}

impl UserSkillService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            user_skills: UserSkillRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            skills: SkillRepository::new(pool.clone()),
            pool,
        }
    }

    pub async fn add(&self, input: UserSkillInput) -> Result<UserSkillDto, AppError> {
        validation::positive_id("User ID", input.user_id)?;
        validation::positive_id("Skill ID", input.skill_id)?;

        if !self.users.exists_by_id(input.user_id).await? {
            return Err(AppError::not_found("User", input.user_id));
        }
        if !self.skills.exists_by_id(input.skill_id).await? {
            return Err(AppError::not_found("Skill", input.skill_id));
        }

        let key = UserSkillKey::new(input.user_id, input.skill_id);
        if self.user_skills.exists(key).await? {
            log::warn!("Skill link {} already exists", key);
            return Err(AppError::Conflict("User already has this skill".to_string()));
        }

        let user_skills = self.user_skills.clone();
        let level = input.proficiency_level;
        DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move { Ok(user_skills.create(tx, key, level).await?) })
        })
        .await?;

        log::info!("Linked {} at {}", key, level);
        self.get(key).await
    }

    pub async fn update_proficiency(
        &self,
        key: UserSkillKey,
        level: ProficiencyLevel,
    ) -> Result<UserSkillDto, AppError> {
        let user_skills = self.user_skills.clone();
        DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move {
                user_skills
                    .update(tx, key, level)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("User skill not found for {}", key)))
            })
        })
        .await?;

        log::info!("Set proficiency of {} to {}", key, level);
        self.get(key).await
    }

    pub async fn remove(&self, key: UserSkillKey) -> Result<(), AppError> {
        let user_skills = self.user_skills.clone();
        let removed = DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move { Ok(user_skills.delete(tx, key).await?) })
        })
        .await?;

        if !removed {
            return Err(AppError::NotFound(format!("User skill not found for {}", key)));
        }

        log::info!("Removed skill link {}", key);
        Ok(())
    }

    pub async fn get(&self, key: UserSkillKey) -> Result<UserSkillDto, AppError> {
        self.user_skills
            .find_details_by_key(key)
            .await?
            .map(UserSkillDto::from)
            .ok_or_else(|| AppError::NotFound(format!("User skill not found for {}", key)))
    }

    pub async fn list(&self) -> Result<Vec<UserSkillDto>, AppError> {
        let rows = self.user_skills.find_all_details().await?;
        Ok(rows.into_iter().map(UserSkillDto::from).collect())
    }

    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<UserSkillDto>, AppError> {
        let rows = self.user_skills.find_details_by_user(user_id).await?;
        Ok(rows.into_iter().map(UserSkillDto::from).collect())
    }

    pub async fn list_by_skill(&self, skill_id: i64) -> Result<Vec<UserSkillDto>, AppError> {
        let rows = self.user_skills.find_details_by_skill(skill_id).await?;
        Ok(rows.into_iter().map(UserSkillDto::from).collect())
    }

    pub async fn list_by_proficiency(
        &self,
        level: ProficiencyLevel,
    ) -> Result<Vec<UserSkillDto>, AppError> {
        let rows = self.user_skills.find_details_by_proficiency(level).await?;
        Ok(rows.into_iter().map(UserSkillDto::from).collect())
    }

    pub async fn list_by_user_and_proficiency(
        &self,
        user_id: i64,
        level: ProficiencyLevel,
    ) -> Result<Vec<UserSkillDto>, AppError> {
        let rows = self
            .user_skills
            .find_details_by_user_and_proficiency(user_id, level)
            .await?;
        Ok(rows.into_iter().map(UserSkillDto::from).collect())
    }

    pub async fn has_skill(&self, key: UserSkillKey) -> Result<bool, AppError> {
        Ok(self.user_skills.exists(key).await?)
    }

    pub async fn count_for_user(&self, user_id: i64) -> Result<i64, AppError> {
        Ok(self.user_skills.count_for_user(user_id).await?)
    }

    pub async fn remove_all_for_user(&self, user_id: i64) -> Result<u64, AppError> {
        let user_skills = self.user_skills.clone();
        let removed = DatabaseTransaction::run(&self.pool, move |tx| {
            Box::pin(async move { Ok(user_skills.delete_all_for_user(tx, user_id).await?) })
        })
        .await?;

        log::info!("Removed {} skill links of user {}", removed, user_id);
        Ok(removed)
    }
}
