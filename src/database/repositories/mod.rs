pub mod hackathon;
pub mod join_request;
pub mod skill;
pub mod submission;
pub mod team;
pub mod team_member;
pub mod user;
pub mod user_skill;

// Re-export all repositories for easy importing
pub use hackathon::{HackathonRecord, HackathonRepository};
pub use join_request::JoinRequestRepository;
pub use skill::SkillRepository;
pub use submission::SubmissionRepository;
pub use team::TeamRepository;
pub use team_member::TeamMemberRepository;
pub use user::UserRepository;
pub use user_skill::UserSkillRepository;
