use chrono::Utc;
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::database::models::Skill;

#[derive(Clone)]
pub struct SkillRepository {
    pool: SqlitePool,
}

impl SkillRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        skill_name: &str,
    ) -> Result<Skill, sqlx::Error> {
        let now = Utc::now();
        let skill = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO
                skills (skill_name, created_at, updated_at)
            VALUES
                (?, ?, ?)
            RETURNING
                id,
                skill_name,
                created_at,
                updated_at
            "#,
        )
        .bind(skill_name)
        .bind(now)
        .bind(now)
        .fetch_one(&mut **tx)
        .await?;

        Ok(skill)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Skill>, sqlx::Error> {
        let skill = sqlx::query_as::<_, Skill>(
            r#"
            SELECT
                id,
                skill_name,
                created_at,
                updated_at
            FROM
                skills
            WHERE
                id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(skill)
    }

    pub async fn find_by_name(&self, skill_name: &str) -> Result<Option<Skill>, sqlx::Error> {
        let skill = sqlx::query_as::<_, Skill>(
            r#"
            SELECT
                id,
                skill_name,
                created_at,
                updated_at
            FROM
                skills
            WHERE
                skill_name = ?
            "#,
        )
        .bind(skill_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(skill)
    }

    pub async fn find_all(&self) -> Result<Vec<Skill>, sqlx::Error> {
        let skills = sqlx::query_as::<_, Skill>(
            r#"
            SELECT
                id,
                skill_name,
                created_at,
                updated_at
            FROM
                skills
            ORDER BY
                skill_name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }

    pub async fn name_exists(&self, skill_name: &str) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM skills WHERE skill_name = ?")
            .bind(skill_name)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM skills WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    pub async fn search_by_name(&self, term: &str) -> Result<Vec<Skill>, sqlx::Error> {
        let skills = sqlx::query_as::<_, Skill>(
            r#"
            SELECT
                id,
                skill_name,
                created_at,
                updated_at
            FROM
                skills
            WHERE
                LOWER(skill_name) LIKE '%' || LOWER(?) || '%'
            ORDER BY
                skill_name
            "#,
        )
        .bind(term)
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }

    /// Skills ranked by how many users list them.
    pub async fn find_popular(&self, limit: i64) -> Result<Vec<Skill>, sqlx::Error> {
        let skills = sqlx::query_as::<_, Skill>(
            r#"
            SELECT
                s.id,
                s.skill_name,
                s.created_at,
                s.updated_at
            FROM
                skills s
                LEFT JOIN user_skills us ON us.skill_id = s.id
            GROUP BY
                s.id
            ORDER BY
                COUNT(us.user_id) DESC,
                s.skill_name
            LIMIT
                ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }

    pub async fn update(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
        skill_name: &str,
    ) -> Result<Option<Skill>, sqlx::Error> {
        let now = Utc::now();
        let skill = sqlx::query_as::<_, Skill>(
            r#"
            UPDATE
                skills
            SET
                skill_name = ?,
                updated_at = ?
            WHERE
                id = ?
            RETURNING
                id,
                skill_name,
                created_at,
                updated_at
            "#,
        )
        .bind(skill_name)
        .bind(now)
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;

        Ok(skill)
    }

    pub async fn delete(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM skills WHERE id = ?")
            .bind(id)
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
