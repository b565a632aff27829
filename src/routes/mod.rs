use actix_web::web;

pub mod auth;
pub mod hackathons;
pub mod join_requests;
pub mod skills;
pub mod submissions;
pub mod team_members;
pub mod teams;
pub mod user_skills;
pub mod users;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(auth::configure)
            .configure(users::configure)
            .configure(skills::configure)
            .configure(user_skills::configure)
            .configure(hackathons::configure)
            .configure(teams::configure)
            .configure(team_members::configure)
            .configure(join_requests::configure)
            .configure(submissions::configure),
    );
}
