use actix_web::web;

use crate::handlers::submissions;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/submissions")
            .route("", web::post().to(submissions::create_submission))
            .route("", web::get().to(submissions::get_submissions))
            .route(
                "/team-hackathon",
                web::get().to(submissions::get_submissions_by_team_and_hackathon),
            )
            .route("/top", web::get().to(submissions::get_top_submissions))
            .route(
                "/team/{id}",
                web::get().to(submissions::get_submissions_by_team),
            )
            .route(
                "/hackathon/{id}",
                web::get().to(submissions::get_submissions_by_hackathon),
            )
            .route(
                "/status/{status}",
                web::get().to(submissions::get_submissions_by_status),
            )
            .route("/{id}/score", web::put().to(submissions::score_submission))
            .route(
                "/{id}/status",
                web::put().to(submissions::update_submission_status),
            )
            .route("/{id}", web::get().to(submissions::get_submission))
            .route("/{id}", web::put().to(submissions::update_submission))
            .route("/{id}", web::delete().to(submissions::delete_submission)),
    );
}
