use actix_web::web;

use crate::handlers::teams;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/teams")
            .route("", web::post().to(teams::create_team))
            .route("", web::get().to(teams::get_teams))
            .route("/available", web::get().to(teams::get_available_teams))
            .route("/search", web::get().to(teams::search_teams))
            .route("/hackathon/{id}", web::get().to(teams::get_teams_by_hackathon))
            .route("/user/{id}", web::get().to(teams::get_teams_by_user))
            .route("/{id}", web::get().to(teams::get_team))
            .route("/{id}", web::put().to(teams::update_team))
            .route("/{id}", web::delete().to(teams::delete_team)),
    );
}
