use actix_web::web;

use crate::handlers::skills;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/skills")
            .route("", web::post().to(skills::create_skill))
            .route("", web::get().to(skills::get_all_skills))
            .route("/search", web::get().to(skills::search_skills))
            .route("/popular", web::get().to(skills::get_popular_skills))
            .route("/{id}", web::get().to(skills::get_skill))
            .route("/{id}", web::put().to(skills::update_skill))
            .route("/{id}", web::delete().to(skills::delete_skill)),
    );
}
