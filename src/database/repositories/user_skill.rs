use chrono::Utc;
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::database::models::{ProficiencyLevel, UserSkill, UserSkillDetails, UserSkillKey};

const DETAILS_SELECT: &str = r#"
    SELECT
        us.user_id,
        us.skill_id,
        us.proficiency_level,
        us.created_at,
        us.updated_at,
        u.name AS user_name,
        u.email AS user_email,
        s.skill_name
    FROM
        user_skills us
        INNER JOIN users u ON u.id = us.user_id
        INNER JOIN skills s ON s.id = us.skill_id
"#;

#[derive(Clone)]
pub struct UserSkillRepository {
    pool: SqlitePool,
}

impl UserSkillRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        key: UserSkillKey,
        proficiency_level: ProficiencyLevel,
    ) -> Result<UserSkill, sqlx::Error> {
        let now = Utc::now();
        let user_skill = sqlx::query_as::<_, UserSkill>(
            r#"
            INSERT INTO
                user_skills (
                    user_id,
                    skill_id,
                    proficiency_level,
                    created_at,
                    updated_at
                )
            VALUES
                (?, ?, ?, ?, ?)
            RETURNING
                user_id,
                skill_id,
                proficiency_level,
                created_at,
                updated_at
            "#,
        )
        .bind(key.user_id)
        .bind(key.skill_id)
        .bind(proficiency_level)
        .bind(now)
        .bind(now)
        .fetch_one(&mut **tx)
        .await?;

        Ok(user_skill)
    }

    pub async fn find_by_key(&self, key: UserSkillKey) -> Result<Option<UserSkill>, sqlx::Error> {
        let user_skill = sqlx::query_as::<_, UserSkill>(
            r#"
            SELECT
                user_id,
                skill_id,
                proficiency_level,
                created_at,
                updated_at
            FROM
                user_skills
            WHERE
                user_id = ?
                AND skill_id = ?
            "#,
        )
        .bind(key.user_id)
        .bind(key.skill_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user_skill)
    }

    pub async fn exists(&self, key: UserSkillKey) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM user_skills WHERE user_id = ? AND skill_id = ?",
        )
        .bind(key.user_id)
        .bind(key.skill_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    pub async fn count_for_user(&self, user_id: i64) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM user_skills WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn find_details_by_key(
        &self,
        key: UserSkillKey,
    ) -> Result<Option<UserSkillDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} WHERE us.user_id = ? AND us.skill_id = ?");
        sqlx::query_as::<_, UserSkillDetails>(&query)
            .bind(key.user_id)
            .bind(key.skill_id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn find_all_details(&self) -> Result<Vec<UserSkillDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} ORDER BY us.user_id, s.skill_name");
        sqlx::query_as::<_, UserSkillDetails>(&query)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_details_by_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<UserSkillDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} WHERE us.user_id = ? ORDER BY s.skill_name");
        sqlx::query_as::<_, UserSkillDetails>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_details_by_skill(
        &self,
        skill_id: i64,
    ) -> Result<Vec<UserSkillDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} WHERE us.skill_id = ? ORDER BY u.name");
        sqlx::query_as::<_, UserSkillDetails>(&query)
            .bind(skill_id)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_details_by_proficiency(
        &self,
        level: ProficiencyLevel,
    ) -> Result<Vec<UserSkillDetails>, sqlx::Error> {
        let query = format!(
            "{DETAILS_SELECT} WHERE us.proficiency_level = ? ORDER BY us.user_id, s.skill_name"
        );
        sqlx::query_as::<_, UserSkillDetails>(&query)
            .bind(level)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_details_by_user_and_proficiency(
        &self,
        user_id: i64,
        level: ProficiencyLevel,
    ) -> Result<Vec<UserSkillDetails>, sqlx::Error> {
        let query = format!(
            "{DETAILS_SELECT} WHERE us.user_id = ? AND us.proficiency_level = ? ORDER BY s.skill_name"
        );
        sqlx::query_as::<_, UserSkillDetails>(&query)
            .bind(user_id)
            .bind(level)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn update(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        key: UserSkillKey,
        proficiency_level: ProficiencyLevel,
    ) -> Result<Option<UserSkill>, sqlx::Error> {
        let now = Utc::now();
        let user_skill = sqlx::query_as::<_, UserSkill>(
            r#"
            UPDATE
                user_skills
            SET
                proficiency_level = ?,
                updated_at = ?
            WHERE
                user_id = ?
                AND skill_id = ?
            RETURNING
                user_id,
                skill_id,
                proficiency_level,
                created_at,
                updated_at
            "#,
        )
        .bind(proficiency_level)
        .bind(now)
        .bind(key.user_id)
        .bind(key.skill_id)
        .fetch_optional(&mut **tx)
        .await?;

        Ok(user_skill)
    }

    pub async fn delete(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        key: UserSkillKey,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM user_skills WHERE user_id = ? AND skill_id = ?")
            .bind(key.user_id)
            .bind(key.skill_id)
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_all_for_user(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        user_id: i64,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM user_skills WHERE user_id = ?")
            .bind(user_id)
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected())
    }
}
