// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::users::{ConfirmEmailCommand, LoginUserCommand, RegisterUserCommand},
    dto::{AuthTokenDto, UserDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SigninRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SigninResponse {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmParams {
    pub token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Account created, confirmation email sent.", body = MessageResponse),
        (status = 409, description = "Username or email already taken.")
    ),
    tag = "Auth"
)]
pub async fn signup(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SignupRequest>,
) -> HttpResult<Json<MessageResponse>> {
    let command = RegisterUserCommand {
        username: payload.username,
        email: payload.email,
        password: payload.password,
    };

    state
        .services
        .user_commands
        .register(command)
        .await
        .into_http()?;

    Ok(Json(MessageResponse {
        message: "user registered successfully, please check your email to activate your account"
            .into(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/auth/signin",
    request_body = SigninRequest,
    responses(
        (status = 200, description = "Bearer token for the authenticated user.", body = SigninResponse),
        (status = 401, description = "Invalid credentials."),
        (status = 403, description = "Account not activated.")
    ),
    tag = "Auth"
)]
pub async fn signin(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SigninRequest>,
) -> HttpResult<Json<SigninResponse>> {
    let command = LoginUserCommand {
        username: payload.username,
        password: payload.password,
    };

    let result = state
        .services
        .user_commands
        .login(command)
        .await
        .into_http()?;

    Ok(Json(SigninResponse {
        token: result.token,
        user: result.user,
    }))
}

#[utoipa::path(
    get,
    path = "/api/auth/confirm",
    params(("token" = String, Query, description = "Confirmation token from the email link.")),
    responses(
        (status = 200, description = "Account activated.", body = MessageResponse),
        (status = 404, description = "Invalid or expired token.")
    ),
    tag = "Auth"
)]
pub async fn confirm(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ConfirmParams>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .user_commands
        .confirm_email(ConfirmEmailCommand {
            token: params.token,
        })
        .await
        .into_http()?;

    Ok(Json(MessageResponse {
        message: "account activated successfully".into(),
    }))
}
