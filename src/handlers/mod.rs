pub mod auth;
pub mod hackathons;
pub mod join_requests;
pub mod shared;
pub mod skills;
pub mod submissions;
pub mod team_members;
pub mod teams;
pub mod user_skills;
pub mod users;
