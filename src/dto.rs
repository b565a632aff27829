//! Outward-facing shapes of the stored records. Every conversion here is pure.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::database::models::{
    Hackathon, HackathonPhase, JoinRequestDetails, JoinRequestStatus, ProficiencyLevel,
    SubmissionDetails, SubmissionStatus, TeamDetails, TeamMemberDetails, TeamRole, User,
    UserRole, UserSkillDetails,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Option<UserRole>,
    pub github_link: Option<String>,
    pub linkedin_link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            role: user.role,
            github_link: user.github_link,
            linkedin_link: user.linkedin_link,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user: UserDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSkillDto {
    pub user_id: i64,
    pub user_name: String,
    pub user_email: String,
    pub skill_id: i64,
    pub skill_name: String,
    pub proficiency_level: ProficiencyLevel,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserSkillDetails> for UserSkillDto {
    fn from(details: UserSkillDetails) -> Self {
        let link = details.user_skill;
        Self {
            user_id: link.user_id,
            user_name: details.user_name,
            user_email: details.user_email,
            skill_id: link.skill_id,
            skill_name: details.skill_name,
            proficiency_level: link.proficiency_level,
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HackathonDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub max_team_size: i64,
    pub created_by: i64,
    pub phase: HackathonPhase,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl HackathonDto {
    /// Projects a hackathon as seen on `today`.
    pub fn project(hackathon: Hackathon, today: NaiveDate) -> Self {
        let phase = hackathon.phase_on(today);
        Self {
            id: hackathon.id,
            title: hackathon.title,
            description: hackathon.description,
            start_date: hackathon.start_date,
            end_date: hackathon.end_date,
            max_team_size: hackathon.max_team_size,
            created_by: hackathon.created_by,
            phase,
            created_at: hackathon.created_at,
            updated_at: hackathon.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub id: i64,
    pub team_name: String,
    pub hackathon_id: i64,
    pub hackathon_title: String,
    pub created_by: i64,
    pub created_by_name: String,
    pub member_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TeamDetails> for TeamDto {
    fn from(details: TeamDetails) -> Self {
        let team = details.team;
        Self {
            id: team.id,
            team_name: team.team_name,
            hackathon_id: team.hackathon_id,
            hackathon_title: details.hackathon_title,
            created_by: team.created_by,
            created_by_name: details.created_by_name,
            member_count: details.member_count,
            created_at: team.created_at,
            updated_at: team.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberDto {
    pub team_id: i64,
    pub team_name: String,
    pub hackathon_id: i64,
    pub hackathon_title: String,
    pub user_id: i64,
    pub user_name: String,
    pub user_email: String,
    pub role_in_team: TeamRole,
    pub joined_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TeamMemberDetails> for TeamMemberDto {
    fn from(details: TeamMemberDetails) -> Self {
        let member = details.member;
        Self {
            team_id: member.team_id,
            team_name: details.team_name,
            hackathon_id: details.hackathon_id,
            hackathon_title: details.hackathon_title,
            user_id: member.user_id,
            user_name: details.user_name,
            user_email: details.user_email,
            role_in_team: member.role_in_team,
            joined_at: member.created_at,
            updated_at: member.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequestDto {
    pub id: i64,
    pub team_id: i64,
    pub team_name: String,
    pub hackathon_id: i64,
    pub hackathon_title: String,
    pub user_id: i64,
    pub user_name: String,
    pub user_email: String,
    pub status: JoinRequestStatus,
    pub requested_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<JoinRequestDetails> for JoinRequestDto {
    fn from(details: JoinRequestDetails) -> Self {
        let request = details.request;
        Self {
            id: request.id,
            team_id: request.team_id,
            team_name: details.team_name,
            hackathon_id: details.hackathon_id,
            hackathon_title: details.hackathon_title,
            user_id: request.user_id,
            user_name: details.user_name,
            user_email: details.user_email,
            status: request.status,
            requested_at: request.requested_at,
            updated_at: request.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDto {
    pub id: i64,
    pub team_id: i64,
    pub team_name: String,
    pub hackathon_id: i64,
    pub hackathon_title: String,
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

impl From<SubmissionDetails> for SubmissionDto {
    fn from(details: SubmissionDetails) -> Self {
        let s = details.submission;
        Self {
            id: s.id,
            team_id: s.team_id,
            team_name: details.team_name,
            hackathon_id: s.hackathon_id,
            hackathon_title: details.hackathon_title,
            project_title: s.project_title,
            project_description: s.project_description,
            github_link: s.github_link,
            demo_link: s.demo_link,
            presentation_link: s.presentation_link,
            technologies: s.technologies,
            features: s.features,
            status: s.status,
            score: s.score,
            judge_comments: s.judge_comments,
            submitted_at: s.submitted_at,
            updated_at: s.updated_at,
        }
    }
}
