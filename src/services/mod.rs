pub mod auth;
pub mod hackathon;
pub mod join_request;
pub mod skill;
pub mod submission;
pub mod team;
pub mod team_member;
pub mod user;
pub mod user_skill;
pub mod validation;

pub use auth::Claims;
pub use hackathon::HackathonService;
pub use join_request::JoinRequestService;
pub use skill::SkillService;
pub use submission::SubmissionService;
pub use team::TeamService;
pub use team_member::TeamMemberService;
pub use user::UserService;
pub use user_skill::UserSkillService;
