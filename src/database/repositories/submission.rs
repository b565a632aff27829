use chrono::Utc;
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::database::models::{Submission, SubmissionDetails, SubmissionInput, SubmissionStatus};

const SUBMISSION_COLUMNS: &str = r#"
    id,
    team_id,
    hackathon_id,
    project_title,
    project_description,
    github_link,
    demo_link,
    presentation_link,
    technologies,
    features,
    status,
    score,
    judge_comments,
    submitted_at,
    updated_at
"#;

const DETAILS_SELECT: &str = r#"
    SELECT
        s.id,
        s.team_id,
        s.hackathon_id,
        s.project_title,
        s.project_description,
        s.github_link,
        s.demo_link,
        s.presentation_link,
        s.technologies,
        s.features,
        s.status,
        s.score,
        s.judge_comments,
        s.submitted_at,
        s.updated_at,
        t.team_name,
        h.title AS hackathon_title
    FROM
        submissions s
        INNER JOIN teams t ON t.id = s.team_id
        INNER JOIN hackathons h ON h.id = s.hackathon_id
"#;

const NEWEST_FIRST: &str = "ORDER BY s.submitted_at DESC, s.id DESC";

#[derive(Clone)]
pub struct SubmissionRepository {
    pool: SqlitePool,
}

impl SubmissionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        input: &SubmissionInput,
    ) -> Result<Submission, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            r#"
            INSERT INTO
                submissions (
                    team_id,
                    hackathon_id,
                    project_title,
                    project_description,
                    github_link,
                    demo_link,
                    presentation_link,
                    technologies,
                    features,
                    status,
                    score,
                    submitted_at,
                    updated_at
                )
            VALUES
                (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 0, ?, ?)
            RETURNING {SUBMISSION_COLUMNS}
            "#
        );
        let submission = sqlx::query_as::<_, Submission>(&query)
            .bind(input.team_id)
            .bind(input.hackathon_id)
            .bind(&input.project_title)
            .bind(&input.project_description)
            .bind(&input.github_link)
            .bind(&input.demo_link)
            .bind(&input.presentation_link)
            .bind(&input.technologies)
            .bind(&input.features)
            .bind(SubmissionStatus::Submitted)
            .bind(now)
            .bind(now)
            .fetch_one(&mut **tx)
            .await?;

        Ok(submission)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Submission>, sqlx::Error> {
        let query = format!("SELECT {SUBMISSION_COLUMNS} FROM submissions WHERE id = ?");
        sqlx::query_as::<_, Submission>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM submissions WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    pub async fn exists_for_team_and_hackathon(
        &self,
        team_id: i64,
        hackathon_id: i64,
    ) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM submissions WHERE team_id = ? AND hackathon_id = ?",
        )
        .bind(team_id)
        .bind(hackathon_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count > 0)
    }

    pub async fn find_details_by_id(
        &self,
        id: i64,
    ) -> Result<Option<SubmissionDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} WHERE s.id = ?");
        sqlx::query_as::<_, SubmissionDetails>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn find_all_details(&self) -> Result<Vec<SubmissionDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} {NEWEST_FIRST}");
        sqlx::query_as::<_, SubmissionDetails>(&query)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_team(&self, team_id: i64) -> Result<Vec<SubmissionDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} WHERE s.team_id = ? {NEWEST_FIRST}");
        sqlx::query_as::<_, SubmissionDetails>(&query)
            .bind(team_id)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_hackathon(
        &self,
        hackathon_id: i64,
    ) -> Result<Vec<SubmissionDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} WHERE s.hackathon_id = ? {NEWEST_FIRST}");
        sqlx::query_as::<_, SubmissionDetails>(&query)
            .bind(hackathon_id)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_status(
        &self,
        status: SubmissionStatus,
    ) -> Result<Vec<SubmissionDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} WHERE s.status = ? {NEWEST_FIRST}");
        sqlx::query_as::<_, SubmissionDetails>(&query)
            .bind(status)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_team_and_hackathon(
        &self,
        team_id: i64,
        hackathon_id: i64,
    ) -> Result<Vec<SubmissionDetails>, sqlx::Error> {
        let query = format!(
            "{DETAILS_SELECT} WHERE s.team_id = ? AND s.hackathon_id = ? {NEWEST_FIRST}"
        );
        sqlx::query_as::<_, SubmissionDetails>(&query)
            .bind(team_id)
            .bind(hackathon_id)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_top(&self, limit: i64) -> Result<Vec<SubmissionDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} ORDER BY s.score DESC, s.submitted_at LIMIT ?");
        sqlx::query_as::<_, SubmissionDetails>(&query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn search_by_title(&self, term: &str) -> Result<Vec<SubmissionDetails>, sqlx::Error> {
        let query = format!(
            "{DETAILS_SELECT} WHERE LOWER(s.project_title) LIKE '%' || LOWER(?) || '%' {NEWEST_FIRST}"
        );
        sqlx::query_as::<_, SubmissionDetails>(&query)
            .bind(term)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_technology(
        &self,
        technology: &str,
    ) -> Result<Vec<SubmissionDetails>, sqlx::Error> {
        let query = format!(
            "{DETAILS_SELECT} WHERE LOWER(s.technologies) LIKE '%' || LOWER(?) || '%' {NEWEST_FIRST}"
        );
        sqlx::query_as::<_, SubmissionDetails>(&query)
            .bind(technology)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn find_by_score_range(
        &self,
        min: f64,
        max: f64,
    ) -> Result<Vec<SubmissionDetails>, sqlx::Error> {
        let query = format!(
            "{DETAILS_SELECT} WHERE s.score BETWEEN ? AND ? ORDER BY s.score DESC, s.id"
        );
        sqlx::query_as::<_, SubmissionDetails>(&query)
            .bind(min)
            .bind(max)
            .fetch_all(&self.pool)
            .await
    }

    /// Writes back the editable project fields of `submission`.
    pub async fn update(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        submission: &Submission,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            r#"
            UPDATE
                submissions
            SET
                project_title = ?,
                project_description = ?,
                github_link = ?,
                demo_link = ?,
                presentation_link = ?,
                technologies = ?,
                features = ?,
                updated_at = ?
            WHERE
                id = ?
            RETURNING {SUBMISSION_COLUMNS}
            "#
        );
        let updated = sqlx::query_as::<_, Submission>(&query)
            .bind(&submission.project_title)
            .bind(&submission.project_description)
            .bind(&submission.github_link)
            .bind(&submission.demo_link)
            .bind(&submission.presentation_link)
            .bind(&submission.technologies)
            .bind(&submission.features)
            .bind(now)
            .bind(submission.id)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(updated)
    }

    pub async fn update_status(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
        status: SubmissionStatus,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            r#"
            UPDATE
                submissions
            SET
                status = ?,
                updated_at = ?
            WHERE
                id = ?
            RETURNING {SUBMISSION_COLUMNS}
            "#
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(status)
            .bind(now)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    /// A missing comment leaves the stored one untouched.
    pub async fn update_score(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
        score: f64,
        judge_comments: Option<&str>,
    ) -> Result<Option<Submission>, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            r#"
            UPDATE
                submissions
            SET
                score = ?,
                judge_comments = COALESCE(?, judge_comments),
                updated_at = ?
            WHERE
                id = ?
            RETURNING {SUBMISSION_COLUMNS}
            "#
        );
        sqlx::query_as::<_, Submission>(&query)
            .bind(score)
            .bind(judge_comments)
            .bind(now)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
    }

    pub async fn delete(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM submissions WHERE id = ?")
            .bind(id)
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
