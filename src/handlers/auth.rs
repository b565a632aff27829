use actix_web::{HttpResponse, Result, web};

use crate::AppState;
use crate::database::models::LoginInput;
use crate::handlers::shared::ok;
use crate::services::Claims;

pub async fn login(
    state: web::Data<AppState>,
    request: web::Json<LoginInput>,
) -> Result<HttpResponse> {
    let response = state.users.login(request.into_inner()).await?;

    Ok(ok(response))
}

pub async fn me(state: web::Data<AppState>, claims: Claims) -> Result<HttpResponse> {
    let user = state.users.get(claims.user_id()).await?;

    Ok(ok(user))
}
