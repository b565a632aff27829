use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::macros::string_enum;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: i64,
    pub team_id: i64,
    pub hackathon_id: i64,
    pub project_title: String,
    pub project_description: String,
    pub github_link: Option<String>,
    pub demo_link: Option<String>,
    pub presentation_link: Option<String>,
    pub technologies: Option<String>,
    pub features: Option<String>,
    pub status: SubmissionStatus,
    pub score: f64,
    pub judge_comments: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SubmissionDetails {
    #[sqlx(flatten)]
    pub submission: Submission,
    pub team_name: String,
    pub hackathon_title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionInput {
    pub team_id: i64,
    pub hackathon_id: i64,
    pub project_title: String,
    pub project_description: String,
    pub github_link: Option<String>,
    pub demo_link: Option<String>,
    pub presentation_link: Option<String>,
    pub technologies: Option<String>,
    pub features: Option<String>,
}

/// Partial edit of a submission. Blank titles and descriptions are ignored;
/// any other field that is present overwrites the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubmissionInput {
    pub project_title: Option<String>,
    pub project_description: Option<String>,
    pub github_link: Option<String>,
    pub demo_link: Option<String>,
    pub presentation_link: Option<String>,
    pub technologies: Option<String>,
    pub features: Option<String>,
}

impl UpdateSubmissionInput {
    pub fn apply_to(self, submission: &mut Submission) {
        if let Some(title) = self.project_title.filter(|t| !t.trim().is_empty()) {
            submission.project_title = title;
        }
        if let Some(description) = self.project_description.filter(|d| !d.trim().is_empty()) {
            submission.project_description = description;
        }
        if self.github_link.is_some() {
            submission.github_link = self.github_link;
        }
        if self.demo_link.is_some() {
            submission.demo_link = self.demo_link;
        }
        if self.presentation_link.is_some() {
            submission.presentation_link = self.presentation_link;
        }
        if self.technologies.is_some() {
            submission.technologies = self.technologies;
        }
        if self.features.is_some() {
            submission.features = self.features;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreInput {
    pub score: f64,
    pub judge_comments: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionStatusInput {
    pub status: SubmissionStatus,
}

string_enum! {
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub enum SubmissionStatus {
        #[default]
        Submitted => "SUBMITTED",
        UnderReview => "UNDER_REVIEW",
        Approved => "APPROVED",
        Rejected => "REJECTED",
    }
}

impl SubmissionStatus {
    /// The submitting team may edit or withdraw only before review starts.
    pub fn is_editable(self) -> bool {
        self == SubmissionStatus::Submitted
    }
}

pub fn is_valid_score(score: f64) -> bool {
    score.is_finite() && (MIN_SCORE..=MAX_SCORE).contains(&score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn submission() -> Submission {
        Submission {
            id: 1,
            team_id: 1,
            hackathon_id: 1,
            project_title: "Rocket".to_string(),
            project_description: "Launches things".to_string(),
            github_link: None,
            demo_link: Some("https://demo.example.com".to_string()),
            presentation_link: None,
            technologies: Some("Rust".to_string()),
            features: None,
            status: SubmissionStatus::Submitted,
            score: 0.0,
            judge_comments: None,
            submitted_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn only_submitted_entries_are_editable() {
        assert!(SubmissionStatus::Submitted.is_editable());
        assert!(!SubmissionStatus::UnderReview.is_editable());
        assert!(!SubmissionStatus::Approved.is_editable());
        assert!(!SubmissionStatus::Rejected.is_editable());
    }

    #[test]
    fn score_bounds_are_inclusive() {
        assert!(is_valid_score(0.0));
        assert!(is_valid_score(100.0));
        assert!(is_valid_score(87.5));
        assert!(!is_valid_score(-1.0));
        assert!(!is_valid_score(101.0));
        assert!(!is_valid_score(f64::NAN));
    }

    #[test]
    fn partial_update_keeps_unset_fields() {
        let mut s = submission();
        UpdateSubmissionInput {
            project_title: Some("   ".to_string()),
            technologies: Some("Rust, SQLite".to_string()),
            ..Default::default()
        }
        .apply_to(&mut s);

        assert_eq!(s.project_title, "Rocket");
        assert_eq!(s.technologies.as_deref(), Some("Rust, SQLite"));
        assert_eq!(s.demo_link.as_deref(), Some("https://demo.example.com"));
    }

    #[test]
    fn under_review_parses_from_snake_case() {
        assert_eq!("under_review".parse(), Ok(SubmissionStatus::UnderReview));
        let json = serde_json::to_string(&SubmissionStatus::UnderReview).unwrap();
        assert_eq!(json, "\"UNDER_REVIEW\"");
    }
}
