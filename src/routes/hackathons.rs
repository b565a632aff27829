use actix_web::web;

use crate::handlers::hackathons;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/hackathons")
            .route("", web::post().to(hackathons::create_hackathon))
            .route("", web::get().to(hackathons::get_hackathons))
            .route("/active", web::get().to(hackathons::get_active_hackathons))
            .route("/upcoming", web::get().to(hackathons::get_upcoming_hackathons))
            .route("/completed", web::get().to(hackathons::get_completed_hackathons))
            .route("/search", web::get().to(hackathons::search_hackathons))
            .route("/{id}", web::get().to(hackathons::get_hackathon))
            .route("/{id}", web::put().to(hackathons::update_hackathon))
            .route("/{id}", web::delete().to(hackathons::delete_hackathon)),
    );
}
