use actix_web::web;

use crate::handlers::join_requests;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/join-requests")
            .route("", web::post().to(join_requests::create_join_request))
            .route("", web::get().to(join_requests::get_join_requests))
            .route("/check", web::get().to(join_requests::check_pending_request))
            .route(
                "/team/{id}",
                web::get().to(join_requests::get_join_requests_by_team),
            )
            .route(
                "/user/{id}",
                web::get().to(join_requests::get_join_requests_by_user),
            )
            .route(
                "/status/{status}",
                web::get().to(join_requests::get_join_requests_by_status),
            )
            .route(
                "/{id}/approve",
                web::put().to(join_requests::approve_join_request),
            )
            .route(
                "/{id}/reject",
                web::put().to(join_requests::reject_join_request),
            )
            .route("/{id}", web::get().to(join_requests::get_join_request))
            .route("/{id}", web::put().to(join_requests::update_join_request))
            .route("/{id}", web::delete().to(join_requests::delete_join_request)),
    );
}
