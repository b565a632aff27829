pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;

use sqlx::SqlitePool;

pub use config::Config;
pub use error::AppError;
use services::{
    HackathonService, JoinRequestService, SkillService, SubmissionService, TeamMemberService,
    TeamService, UserService, UserSkillService,
};

/// Shared handler state. Every service holds a handle to the same pool.
#[derive(Clone)]
pub struct AppState {
    pub users: UserService,
    pub skills: SkillService,
    pub user_skills: UserSkillService,
    pub hackathons: HackathonService,
    pub teams: TeamService,
    pub team_members: TeamMemberService,
    pub join_requests: JoinRequestService,
    pub submissions: SubmissionService,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        Self {
            users: UserService::new(pool.clone(), config.clone()),
            skills: SkillService::new(pool.clone()),
            user_skills: UserSkillService::new(pool.clone()),
            hackathons: HackathonService::new(pool.clone(), config.default_max_team_size),
            teams: TeamService::new(pool.clone()),
            team_members: TeamMemberService::new(pool.clone()),
            join_requests: JoinRequestService::new(pool.clone()),
            submissions: SubmissionService::new(pool),
        }
    }
}
