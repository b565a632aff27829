use actix_web::web;

use crate::handlers::team_members;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/team-members")
            .route("", web::post().to(team_members::add_team_member))
            .route("", web::get().to(team_members::get_team_members))
            .route("/check", web::get().to(team_members::check_membership))
            .route(
                "/team/{team_id}",
                web::get().to(team_members::get_members_of_team),
            )
            .route(
                "/user/{user_id}",
                web::get().to(team_members::get_memberships_of_user),
            )
            .route(
                "/{team_id}/{user_id}",
                web::get().to(team_members::get_team_member),
            )
            .route(
                "/{team_id}/{user_id}",
                web::put().to(team_members::update_team_member),
            )
            .route(
                "/{team_id}/{user_id}",
                web::delete().to(team_members::remove_team_member),
            ),
    );
}
