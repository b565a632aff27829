pub mod hackathon;
pub mod join_request;
pub(crate) mod macros;
pub mod skill;
pub mod submission;
pub mod team;
pub mod user;

// Re-export all models for easy importing
pub use hackathon::*;
pub use join_request::*;
pub use skill::*;
pub use submission::*;
pub use team::*;
pub use user::*;
