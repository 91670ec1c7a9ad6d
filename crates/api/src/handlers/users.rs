//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chronicle_core::error::CoreError;
use chronicle_core::user::{AuthenticatedUser, NewUser};
use chronicle_core::validation::forms::validate_new_user;
use chronicle_store::models::user::CreateUser;
use chronicle_store::repositories::UserRepo;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::auth::start_session;
use crate::state::AppState;

/// POST /users
///
/// Register a new account and sign it in. Responds 201 with the public user
/// and a session cookie.
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(input): AppJson<NewUser>,
) -> AppResult<impl IntoResponse> {
    let form = validate_new_user(&input);
    if let Some(message) = form.first_error() {
        let field = if form.username.is_valid() {
            "password"
        } else {
            "username"
        };
        return Err(AppError::Core(CoreError::Validation(format!(
            "{field}: {message}"
        ))));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.store,
        CreateUser {
            username: input.username,
            password_hash,
        },
    )?;
    tracing::info!(user_id = %user.id, username = %user.username, "User registered");

    let cookie = start_session(&state, &user.id)?;

    Ok((
        StatusCode::CREATED,
        [(SET_COOKIE, cookie)],
        Json(AuthenticatedUser::from(&user)),
    ))
}
