use actix_web::{HttpResponse, Result, web};

use crate::AppState;
use crate::database::models::{CreateUserInput, UpdateUserInput, UserRole};
use crate::handlers::shared::{SearchQuery, created, deleted, ok, ok_with_message, parse_param};

pub async fn create_user(
    state: web::Data<AppState>,
    input: web::Json<CreateUserInput>,
) -> Result<HttpResponse> {
    let user = state.users.register(input.into_inner()).await?;

    Ok(created(user, "User created successfully"))
}

pub async fn get_users(state: web::Data<AppState>) -> Result<HttpResponse> {
    let users = state.users.list().await?;

    Ok(ok(users))
}

pub async fn get_user(state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse> {
    let user = state.users.get(path.into_inner()).await?;

    Ok(ok(user))
}

pub async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    input: web::Json<UpdateUserInput>,
) -> Result<HttpResponse> {
    let user = state
        .users
        .update_profile(path.into_inner(), input.into_inner())
        .await?;

    Ok(ok_with_message(user, "User updated successfully"))
}

pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    state.users.delete(path.into_inner()).await?;

    Ok(deleted("User deleted successfully"))
}

pub async fn get_user_by_email(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let user = state.users.get_by_email(&path.into_inner()).await?;

    Ok(ok(user))
}

pub async fn get_users_by_role(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let role: UserRole = parse_param(&path.into_inner())?;
    let users = state.users.list_by_role(role).await?;

    Ok(ok(users))
}

pub async fn search_users(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse> {
    let users = state.users.search(&query.q).await?;

    Ok(ok(users))
}

pub async fn get_users_by_skill(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let users = state.users.list_by_skill(&path.into_inner()).await?;

    Ok(ok(users))
}

pub async fn get_users_by_team(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let users = state.users.list_by_team(path.into_inner()).await?;

    Ok(ok(users))
}
