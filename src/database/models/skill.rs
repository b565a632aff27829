use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::macros::string_enum;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: i64,
    pub skill_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillInput {
    pub skill_name: String,
}

/// Composite key of the user/skill link table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSkillKey {
    pub user_id: i64,
    pub skill_id: i64,
}

impl UserSkillKey {
    pub fn new(user_id: i64, skill_id: i64) -> Self {
        Self { user_id, skill_id }
    }
}

impl std::fmt::Display for UserSkillKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user {} / skill {}", self.user_id, self.skill_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserSkill {
    pub user_id: i64,
    pub skill_id: i64,
    pub proficiency_level: ProficiencyLevel,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserSkill {
    pub fn key(&self) -> UserSkillKey {
        UserSkillKey::new(self.user_id, self.skill_id)
    }
}

/// A user/skill link joined with the names of both sides.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserSkillDetails {
    #[sqlx(flatten)]
    pub user_skill: UserSkill,
    pub user_name: String,
    pub user_email: String,
    pub skill_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSkillInput {
    pub user_id: i64,
    pub skill_id: i64,
    pub proficiency_level: ProficiencyLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserSkillInput {
    pub proficiency_level: ProficiencyLevel,
}

string_enum! {
    #[derive(
        Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    )]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub enum ProficiencyLevel {
        #[default]
        Beginner => "BEGINNER",
        Intermediate => "INTERMEDIATE",
        Advanced => "ADVANCED",
        Expert => "EXPERT",
    }
}
