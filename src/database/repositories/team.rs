use chrono::Utc;
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::database::models::{Team, TeamDetails, TeamInput};

const TEAM_COLUMNS: &str = r#"
    id,
    hackathon_id,
    created_by,
    team_name,
    created_at,
    updated_at
"#;

const DETAILS_SELECT: &str = r#"
    SELECT
        t.id,
        t.hackathon_id,
        t.created_by,
        t.team_name,
        t.created_at,
        t.updated_at,
        h.title AS hackathon_title,
        u.name AS created_by_name,
        (
            SELECT
                COUNT(*)
            FROM
                team_members tm
            WHERE
                tm.team_id = t.id
        ) AS member_count
    FROM
        teams t
        INNER JOIN hackathons h ON h.id = t.hackathon_id
        INNER JOIN users u ON u.id = t.created_by
"#;

#[derive(Clone)]
pub struct TeamRepository {
    pool: SqlitePool,
}

impl TeamRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        input: &TeamInput,
    ) -> Result<Team, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            r#"
            INSERT INTO
                teams (
                    hackathon_id,
                    created_by,
                    team_name,
                    created_at,
                    updated_at
                )
            VALUES
                (?, ?, ?, ?, ?)
            RETURNING {TEAM_COLUMNS}
            "#
        );
        let team = sqlx::query_as::<_, Team>(&query)
            .bind(input.hackathon_id)
            .bind(input.created_by)
            .bind(&input.team_name)
            .bind(now)
            .bind(now)
            .fetch_one(&mut **tx)
            .await?;

        Ok(team)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Team>, sqlx::Error> {
        let query = format!("SELECT {TEAM_COLUMNS} FROM teams WHERE id = ?");
        sqlx::query_as::<_, Team>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn name_exists(&self, team_name: &str) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teams WHERE team_name = ?")
            .bind(team_name)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teams WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    pub async fn count_members(&self, team_id: i64) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM team_members WHERE team_id = ?")
            .bind(team_id)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn find_details_by_id(&self, id: i64) -> Result<Option<TeamDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} WHERE t.id = ?");
        sqlx::query_as::<_, TeamDetails>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn find_details_by_name(
        &self,
        team_name: &str,
    ) -> Result<Option<TeamDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} WHERE t.team_name = ?");
        sqlx::query_as::<_, TeamDetails>(&query)
            .bind(team_name)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn find_all_details(&self) -> Result<Vec<TeamDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} ORDER BY t.id");
        sqlx::query_as::<_, TeamDetails>(&query)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn search_by_name(&self, term: &str) -> Result<Vec<TeamDetails>, sqlx::Error> {
        let query = format!(
            "{DETAILS_SELECT} WHERE LOWER(t.team_name) LIKE '%' || LOWER(?) || '%' ORDER BY t.team_name"
        );
        sqlx::query_as::<_, TeamDetails>(&query)
            .bind(term)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_hackathon(
        &self,
        hackathon_id: i64,
    ) -> Result<Vec<TeamDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} WHERE t.hackathon_id = ? ORDER BY t.id");
        sqlx::query_as::<_, TeamDetails>(&query)
            .bind(hackathon_id)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_creator(&self, user_id: i64) -> Result<Vec<TeamDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} WHERE t.created_by = ? ORDER BY t.id");
        sqlx::query_as::<_, TeamDetails>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_member(&self, user_id: i64) -> Result<Vec<TeamDetails>, sqlx::Error> {
        let query = format!(
            r#"
            {DETAILS_SELECT}
            WHERE
                EXISTS (
                    SELECT
                        1
                    FROM
                        team_members m
                    WHERE
                        m.team_id = t.id
                        AND m.user_id = ?
                )
            ORDER BY
                t.id
            "#
        );
        sqlx::query_as::<_, TeamDetails>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
    }

    /// Teams whose member count is below their hackathon's size cap.
    pub async fn find_with_available_spots(&self) -> Result<Vec<TeamDetails>, sqlx::Error> {
        let query = format!(
            r#"
            {DETAILS_SELECT}
            WHERE
                (
                    SELECT
                        COUNT(*)
                    FROM
                        team_members m
                    WHERE
                        m.team_id = t.id
                ) < h.max_team_size
            ORDER BY
                t.id
            "#
        );
        sqlx::query_as::<_, TeamDetails>(&query)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn update_name(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
        team_name: &str,
    ) -> Result<Option<Team>, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            r#"
            UPDATE
                teams
            SET
                team_name = ?,
                updated_at = ?
            WHERE
                id = ?
            RETURNING {TEAM_COLUMNS}
            "#
        );
        let team = sqlx::query_as::<_, Team>(&query)
            .bind(team_name)
            .bind(now)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(team)
    }

    pub async fn delete(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM teams WHERE id = ?")
            .bind(id)
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
