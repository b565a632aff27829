use chrono::Utc;
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::database::models::{CreateUserInput, UpdateUserInput, User, UserRole};

#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        input: &CreateUserInput,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        let now = Utc::now();
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO
                users (
                    name,
                    email,
                    password_hash,
                    phone,
                    role,
                    github_link,
                    linkedin_link,
                    created_at,
                    updated_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING
                id,
                name,
                email,
                password_hash,
                phone,
                role,
                github_link,
                linkedin_link,
                created_at,
                updated_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(password_hash)
        .bind(&input.phone)
        .bind(input.role)
        .bind(&input.github_link)
        .bind(&input.linkedin_link)
        .bind(now)
        .bind(now)
        .fetch_one(&mut **tx)
        .await?;

        Ok(user)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT
                id,
                name,
                email,
                password_hash,
                phone,
                role,
                github_link,
                linkedin_link,
                created_at,
                updated_at
            FROM
                users
            WHERE
                id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT
                id,
                name,
                email,
                password_hash,
                phone,
                role,
                github_link,
                linkedin_link,
                created_at,
                updated_at
            FROM
                users
            WHERE
                email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn find_all(&self) -> Result<Vec<User>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT
                id,
                name,
                email,
                password_hash,
                phone,
                role,
                github_link,
                linkedin_link,
                created_at,
                updated_at
            FROM
                users
            ORDER BY
                id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    pub async fn update(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
        input: &UpdateUserInput,
    ) -> Result<Option<User>, sqlx::Error> {
        let now = Utc::now();
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE
                users
            SET
                name = ?,
                email = ?,
                phone = ?,
                role = ?,
                github_link = ?,
                linkedin_link = ?,
                updated_at = ?
            WHERE
                id = ?
            RETURNING
                id,
                name,
                email,
                password_hash,
                phone,
                role,
                github_link,
                linkedin_link,
                created_at,
                updated_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(input.role)
        .bind(&input.github_link)
        .bind(&input.linkedin_link)
        .bind(now)
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;

        Ok(user)
    }

    pub async fn delete(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_role(&self, role: UserRole) -> Result<Vec<User>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT
                id,
                name,
                email,
                password_hash,
                phone,
                role,
                github_link,
                linkedin_link,
                created_at,
                updated_at
            FROM
                users
            WHERE
                role = ?
            ORDER BY
                id
            "#,
        )
        .bind(role)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Case-insensitive partial match on name or email.
    pub async fn search(&self, term: &str) -> Result<Vec<User>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT
                id,
                name,
                email,
                password_hash,
                phone,
                role,
                github_link,
                linkedin_link,
                created_at,
                updated_at
            FROM
                users
            WHERE
                LOWER(name) LIKE '%' || LOWER(?1) || '%'
                OR LOWER(email) LIKE '%' || LOWER(?1) || '%'
            ORDER BY
                name
            "#,
        )
        .bind(term)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    pub async fn find_by_skill_name(&self, skill_name: &str) -> Result<Vec<User>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT
                u.id,
                u.name,
                u.email,
                u.password_hash,
                u.phone,
                u.role,
                u.github_link,
                u.linkedin_link,
                u.created_at,
                u.updated_at
            FROM
                users u
                INNER JOIN user_skills us ON us.user_id = u.id
                INNER JOIN skills s ON s.id = us.skill_id
            WHERE
                LOWER(s.skill_name) = LOWER(?)
            ORDER BY
                u.id
            "#,
        )
        .bind(skill_name)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    pub async fn find_by_team(&self, team_id: i64) -> Result<Vec<User>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT
                u.id,
                u.name,
                u.email,
                u.password_hash,
                u.phone,
                u.role,
                u.github_link,
                u.linkedin_link,
                u.created_at,
                u.updated_at
            FROM
                users u
                INNER JOIN team_members tm ON tm.user_id = u.id
            WHERE
                tm.team_id = ?
            ORDER BY
                tm.created_at
            "#,
        )
        .bind(team_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}
