use chrono::{NaiveDate, Utc};
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::database::models::Hackathon;

const HACKATHON_COLUMNS: &str = r#"
    id,
    title,
    description,
    start_date,
    end_date,
    max_team_size,
    created_by,
    created_at,
    updated_at
"#;

#[derive(Clone)]
pub struct HackathonRepository {
    pool: SqlitePool,
}

/// Column values shared by insert and update.
pub struct HackathonRecord<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub max_team_size: i64,
}

impl HackathonRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        record: &HackathonRecord<'_>,
        created_by: i64,
    ) -> Result<Hackathon, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            r#"
            INSERT INTO
                hackathons (
                    title,
                    description,
                    start_date,
                    end_date,
                    max_team_size,
                    created_by,
                    created_at,
                    updated_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {HACKATHON_COLUMNS}
            "#
        );
        let hackathon = sqlx::query_as::<_, Hackathon>(&query)
            .bind(record.title)
            .bind(record.description)
            .bind(record.start_date)
            .bind(record.end_date)
            .bind(record.max_team_size)
            .bind(created_by)
            .bind(now)
            .bind(now)
            .fetch_one(&mut **tx)
            .await?;

        Ok(hackathon)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Hackathon>, sqlx::Error> {
        let query = format!("SELECT {HACKATHON_COLUMNS} FROM hackathons WHERE id = ?");
        sqlx::query_as::<_, Hackathon>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn find_by_title(&self, title: &str) -> Result<Option<Hackathon>, sqlx::Error> {
        let query = format!("SELECT {HACKATHON_COLUMNS} FROM hackathons WHERE title = ?");
        sqlx::query_as::<_, Hackathon>(&query)
            .bind(title)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<Hackathon>, sqlx::Error> {
        let query = format!("SELECT {HACKATHON_COLUMNS} FROM hackathons ORDER BY id");
        sqlx::query_as::<_, Hackathon>(&query)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn title_exists(&self, title: &str) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hackathons WHERE title = ?")
            .bind(title)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hackathons WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    pub async fn search_by_title(&self, term: &str) -> Result<Vec<Hackathon>, sqlx::Error> {
        let query = format!(
            r#"
            SELECT {HACKATHON_COLUMNS}
            FROM
                hackathons
            WHERE
                LOWER(title) LIKE '%' || LOWER(?) || '%'
            ORDER BY
                start_date
            "#
        );
        sqlx::query_as::<_, Hackathon>(&query)
            .bind(term)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_upcoming(&self, today: NaiveDate) -> Result<Vec<Hackathon>, sqlx::Error> {
        let query = format!(
            "SELECT {HACKATHON_COLUMNS} FROM hackathons WHERE start_date > ? ORDER BY start_date"
        );
        sqlx::query_as::<_, Hackathon>(&query)
            .bind(today)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_active(&self, today: NaiveDate) -> Result<Vec<Hackathon>, sqlx::Error> {
        let query = format!(
            r#"
            SELECT {HACKATHON_COLUMNS}
            FROM
                hackathons
            WHERE
                start_date <= ?1
                AND end_date >= ?1
            ORDER BY
                start_date
            "#
        );
        sqlx::query_as::<_, Hackathon>(&query)
            .bind(today)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_completed(&self, today: NaiveDate) -> Result<Vec<Hackathon>, sqlx::Error> {
        let query = format!(
            "SELECT {HACKATHON_COLUMNS} FROM hackathons WHERE end_date < ? ORDER BY start_date DESC"
        );
        sqlx::query_as::<_, Hackathon>(&query)
            .bind(today)
            .fetch_all(&self.pool)
            .await
    }

    /// Hackathons that start within `[from, to]`.
    pub async fn find_in_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Hackathon>, sqlx::Error> {
        let query = format!(
            r#"
            SELECT {HACKATHON_COLUMNS}
            FROM
                hackathons
            WHERE
                start_date BETWEEN ? AND ?
            ORDER BY
                start_date
            "#
        );
        sqlx::query_as::<_, Hackathon>(&query)
            .bind(from)
            .bind(to)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn update(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
        record: &HackathonRecord<'_>,
    ) -> Result<Option<Hackathon>, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            r#"
            UPDATE
                hackathons
            SET
                title = ?,
                description = ?,
                start_date = ?,
                end_date = ?,
                max_team_size = ?,
                updated_at = ?
            WHERE
                id = ?
            RETURNING {HACKATHON_COLUMNS}
            "#
        );
        let hackathon = sqlx::query_as::<_, Hackathon>(&query)
            .bind(record.title)
            .bind(record.description)
            .bind(record.start_date)
            .bind(record.end_date)
            .bind(record.max_team_size)
            .bind(now)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(hackathon)
    }

    pub async fn delete(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM hackathons WHERE id = ?")
            .bind(id)
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
