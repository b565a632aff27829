use actix_web::web;

use crate::handlers::users;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .route("", web::post().to(users::create_user))
            .route("", web::get().to(users::get_users))
            .route("/search", web::get().to(users::search_users))
            .route("/email/{email}", web::get().to(users::get_user_by_email))
            .route("/role/{role}", web::get().to(users::get_users_by_role))
            .route("/skill/{skill_name}", web::get().to(users::get_users_by_skill))
            .route("/team/{team_id}", web::get().to(users::get_users_by_team))
            .route("/{id}", web::get().to(users::get_user))
            .route("/{id}", web::put().to(users::update_user))
            .route("/{id}", web::delete().to(users::delete_user)),
    );
}
