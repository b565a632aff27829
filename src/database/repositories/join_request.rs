use chrono::Utc;
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::database::models::{JoinRequest, JoinRequestDetails, JoinRequestStatus};

const DETAILS_SELECT: &str = r#"
    SELECT
        jr.id,
        jr.team_id,
        jr.user_id,
        jr.status,
        jr.requested_at,
        jr.updated_at,
        t.team_name,
        t.hackathon_id,
        h.title AS hackathon_title,
        u.name AS user_name,
        u.email AS user_email
    FROM
        join_requests jr
        INNER JOIN teams t ON t.id = jr.team_id
        INNER JOIN hackathons h ON h.id = t.hackathon_id
        INNER JOIN users u ON u.id = jr.user_id
"#;

#[derive(Clone)]
pub struct JoinRequestRepository {
    pool: SqlitePool,
}

impl JoinRequestRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        team_id: i64,
        user_id: i64,
    ) -> Result<JoinRequest, sqlx::Error> {
        let now = Utc::now();
        let request = sqlx::query_as::<_, JoinRequest>(
            r#"
            INSERT INTO
                join_requests (
                    team_id,
                    user_id,
                    status,
                    requested_at,
                    updated_at
                )
            VALUES
                (?, ?, ?, ?, ?)
            RETURNING
                id,
                team_id,
                user_id,
                status,
                requested_at,
                updated_at
            "#,
        )
        .bind(team_id)
        .bind(user_id)
        .bind(JoinRequestStatus::Pending)
        .bind(now)
        .bind(now)
        .fetch_one(&mut **tx)
        .await?;

        Ok(request)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<JoinRequest>, sqlx::Error> {
        let request = sqlx::query_as::<_, JoinRequest>(
            r#"
            SELECT
                id,
                team_id,
                user_id,
                status,
                requested_at,
                updated_at
            FROM
                join_requests
            WHERE
                id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(request)
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM join_requests WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    pub async fn has_pending(&self, user_id: i64, team_id: i64) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT
                COUNT(*)
            FROM
                join_requests
            WHERE
                user_id = ?
                AND team_id = ?
                AND status = ?
            "#,
        )
        .bind(user_id)
        .bind(team_id)
        .bind(JoinRequestStatus::Pending)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    pub async fn count_pending_for_team(&self, team_id: i64) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM join_requests WHERE team_id = ? AND status = ?")
            .bind(team_id)
            .bind(JoinRequestStatus::Pending)
            .fetch_one(&self.pool)
            .await
    }

    pub async fn find_details_by_id(
        &self,
        id: i64,
    ) -> Result<Option<JoinRequestDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} WHERE jr.id = ?");
        sqlx::query_as::<_, JoinRequestDetails>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn find_all_details(&self) -> Result<Vec<JoinRequestDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} ORDER BY jr.requested_at DESC, jr.id DESC");
        sqlx::query_as::<_, JoinRequestDetails>(&query)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_team(&self, team_id: i64) -> Result<Vec<JoinRequestDetails>, sqlx::Error> {
        let query = format!(
            "{DETAILS_SELECT} WHERE jr.team_id = ? ORDER BY jr.requested_at DESC, jr.id DESC"
        );
        sqlx::query_as::<_, JoinRequestDetails>(&query)
            .bind(team_id)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_user(&self, user_id: i64) -> Result<Vec<JoinRequestDetails>, sqlx::Error> {
        let query = format!(
            "{DETAILS_SELECT} WHERE jr.user_id = ? ORDER BY jr.requested_at DESC, jr.id DESC"
        );
        sqlx::query_as::<_, JoinRequestDetails>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_status(
        &self,
        status: JoinRequestStatus,
    ) -> Result<Vec<JoinRequestDetails>, sqlx::Error> {
        let query = format!(
            "{DETAILS_SELECT} WHERE jr.status = ? ORDER BY jr.requested_at DESC, jr.id DESC"
        );
        sqlx::query_as::<_, JoinRequestDetails>(&query)
            .bind(status)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_pending_by_team(
        &self,
        team_id: i64,
    ) -> Result<Vec<JoinRequestDetails>, sqlx::Error> {
        let query = format!(
            r#"
            {DETAILS_SELECT}
            WHERE
                jr.team_id = ?
                AND jr.status = ?
            ORDER BY
                jr.requested_at DESC,
                jr.id DESC
            "#
        );
        sqlx::query_as::<_, JoinRequestDetails>(&query)
            .bind(team_id)
            .bind(JoinRequestStatus::Pending)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_team_and_user(
        &self,
        team_id: i64,
        user_id: i64,
    ) -> Result<Vec<JoinRequestDetails>, sqlx::Error> {
        let query = format!(
            r#"
            {DETAILS_SELECT}
            WHERE
                jr.team_id = ?
                AND jr.user_id = ?
            ORDER BY
                jr.requested_at DESC,
                jr.id DESC
            "#
        );
        sqlx::query_as::<_, JoinRequestDetails>(&query)
            .bind(team_id)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
    }

    /// Moves a request to `next` only while it is still in `expected`, so two
    /// concurrent decisions cannot both win.
    pub async fn update_status(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
        expected: JoinRequestStatus,
        next: JoinRequestStatus,
    ) -> Result<Option<JoinRequest>, sqlx::Error> {
        let now = Utc::now();
        let request = sqlx::query_as::<_, JoinRequest>(
            r#"
            UPDATE
                join_requests
            SET
                status = ?,
                updated_at = ?
            WHERE
                id = ?
                AND status = ?
            RETURNING
                id,
                team_id,
                user_id,
                status,
                requested_at,
                updated_at
            "#,
        )
        .bind(next)
        .bind(now)
        .bind(id)
        .bind(expected)
        .fetch_optional(&mut **tx)
        .await?;

        Ok(request)
    }

    pub async fn delete(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM join_requests WHERE id = ?")
            .bind(id)
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_all_for_team(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        team_id: i64,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM join_requests WHERE team_id = ?")
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
        let result = sqlx::query("DELETE FROM join_requests WHERE user_id = ?")
            .bind(user_id)
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected())
    }
}
