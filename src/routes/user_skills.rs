use actix_web::web;

use crate::handlers::user_skills;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/user-skills")
            .route("", web::post().to(user_skills::add_user_skill))
            .route("", web::get().to(user_skills::get_all_user_skills))
            .route("/check", web::get().to(user_skills::check_user_skill))
            .route(
                "/user/{user_id}",
                web::get().to(user_skills::get_skills_for_user),
            )
            .route(
                "/skill/{skill_id}",
                web::get().to(user_skills::get_users_with_skill),
            )
            .route(
                "/proficiency/{level}",
                web::get().to(user_skills::get_user_skills_by_proficiency),
            )
            .route(
                "/{user_id}/{skill_id}",
                web::get().to(user_skills::get_user_skill),
            )
            .route(
                "/{user_id}/{skill_id}",
                web::put().to(user_skills::update_user_skill),
            )
            .route(
                "/{user_id}/{skill_id}",
                web::delete().to(user_skills::remove_user_skill),
            ),
    );
}
