use chrono::Utc;
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::database::models::{TeamMember, TeamMemberDetails, TeamMemberKey, TeamRole};

const DETAILS_SELECT: &str = r#"
    SELECT
        tm.team_id,
        tm.user_id,
        tm.role_in_team,
        tm.created_at,
        tm.updated_at,
        t.team_name,
        t.hackathon_id,
        h.title AS hackathon_title,
        u.name AS user_name,
        u.email AS user_email
    FROM
        team_members tm
        INNER JOIN teams t ON t.id = tm.team_id
        INNER JOIN hackathons h ON h.id = t.hackathon_id
        INNER JOIN users u ON u.id = tm.user_id
"#;

#[derive(Clone)]
pub struct TeamMemberRepository {
    pool: SqlitePool,
}

impl TeamMemberRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        key: TeamMemberKey,
        role_in_team: TeamRole,
    ) -> Result<TeamMember, sqlx::Error> {
        let now = Utc::now();
        let member = sqlx::query_as::<_, TeamMember>(
            r#"
            INSERT INTO
                team_members (
                    team_id,
                    user_id,
                    role_in_team,
                    created_at,
                    updated_at
                )
            VALUES
                (?, ?, ?, ?, ?)
            RETURNING
                team_id,
                user_id,
                role_in_team,
                created_at,
                updated_at
            "#,
        )
        .bind(key.team_id)
        .bind(key.user_id)
        .bind(role_in_team)
        .bind(now)
        .bind(now)
        .fetch_one(&mut **tx)
        .await?;

        Ok(member)
    }

    pub async fn exists(&self, key: TeamMemberKey) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM team_members WHERE team_id = ? AND user_id = ?",
        )
        .bind(key.team_id)
        .bind(key.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    pub async fn count_for_team(&self, team_id: i64) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM team_members WHERE team_id = ?")
            .bind(team_id)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn count_for_user(&self, user_id: i64) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM team_members WHERE user_id = ?")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn find_details_by_key(
        &self,
        key: TeamMemberKey,
    ) -> Result<Option<TeamMemberDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} WHERE tm.team_id = ? AND tm.user_id = ?");
        sqlx::query_as::<_, TeamMemberDetails>(&query)
            .bind(key.team_id)
            .bind(key.user_id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn find_all_details(&self) -> Result<Vec<TeamMemberDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} ORDER BY tm.team_id, tm.created_at");
        sqlx::query_as::<_, TeamMemberDetails>(&query)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_team(&self, team_id: i64) -> Result<Vec<TeamMemberDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} WHERE tm.team_id = ? ORDER BY tm.created_at");
        sqlx::query_as::<_, TeamMemberDetails>(&query)
            .bind(team_id)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_user(&self, user_id: i64) -> Result<Vec<TeamMemberDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} WHERE tm.user_id = ? ORDER BY tm.created_at");
        sqlx::query_as::<_, TeamMemberDetails>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_team_and_role(
        &self,
        team_id: i64,
        role_in_team: TeamRole,
    ) -> Result<Vec<TeamMemberDetails>, sqlx::Error> {
        let query = format!(
            "{DETAILS_SELECT} WHERE tm.team_id = ? AND tm.role_in_team = ? ORDER BY tm.created_at"
        );
        sqlx::query_as::<_, TeamMemberDetails>(&query)
            .bind(team_id)
            .bind(role_in_team)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn update_role(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        key: TeamMemberKey,
        role_in_team: TeamRole,
    ) -> Result<Option<TeamMember>, sqlx::Error> {
        let now = Utc::now();
        let member = sqlx::query_as::<_, TeamMember>(
            r#"
            UPDATE
                team_members
            SET
                role_in_team = ?,
                updated_at = ?
            WHERE
                team_id = ?
                AND user_id = ?
            RETURNING
                team_id,
                user_id,
                role_in_team,
                created_at,
                updated_at
            "#,
        )
        .bind(role_in_team)
        .bind(now)
        .bind(key.team_id)
        .bind(key.user_id)
        .fetch_optional(&mut **tx)
        .await?;

        Ok(member)
    }

    pub async fn delete(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        key: TeamMemberKey,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM team_members WHERE team_id = ? AND user_id = ?")
            .bind(key.team_id)
            .bind(key.user_id)
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_all_for_team(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        team_id: i64,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM team_members WHERE team_id = ?")
            .bind(team_id)
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn delete_all_for_user(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        user_id: i64,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM team_members WHERE user_id = ?")
            .bind(user_id)
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected())
    }
}
