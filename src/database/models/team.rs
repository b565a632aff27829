use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::macros::string_enum;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: i64,
    pub hackathon_id: i64,
    pub created_by: i64,
    pub team_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A team joined with its hackathon and creator.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TeamDetails {
    #[sqlx(flatten)]
    pub team: Team,
    pub hackathon_title: String,
    pub created_by_name: String,
    pub member_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamInput {
    pub hackathon_id: i64,
    pub created_by: i64,
    pub team_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamInput {
    pub team_name: String,
}

/// Composite key of the team membership table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberKey {
    pub team_id: i64,
    pub user_id: i64,
}

impl TeamMemberKey {
    pub fn new(team_id: i64, user_id: i64) -> Self {
        Self { team_id, user_id }
    }
}

impl std::fmt::Display for TeamMemberKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "team {} / user {}", self.team_id, self.user_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub team_id: i64,
    pub user_id: i64,
    pub role_in_team: TeamRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TeamMember {
    pub fn key(&self) -> TeamMemberKey {
        TeamMemberKey::new(self.team_id, self.user_id)
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TeamMemberDetails {
    #[sqlx(flatten)]
    pub member: TeamMember,
    pub team_name: String,
    pub hackathon_id: i64,
    pub hackathon_title: String,
    pub user_name: String,
    pub user_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberInput {
    pub team_id: i64,
    pub user_id: i64,
    pub role_in_team: TeamRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamMemberInput {
    pub role_in_team: TeamRole,
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub enum TeamRole {
        TeamLead => "TEAM_LEAD",
        Developer => "DEVELOPER",
        Designer => "DESIGNER",
        ProductManager => "PRODUCT_MANAGER",
        DataScientist => "DATA_SCIENTIST",
        DevopsEngineer => "DEVOPS_ENGINEER",
        UiUxDesigner => "UI_UX_DESIGNER",
    }
}
