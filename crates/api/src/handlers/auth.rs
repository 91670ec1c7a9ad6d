//! Handlers for session management (login, current user, logout).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderValue;
use axum::response::IntoResponse;
use axum::Json;
use chronicle_core::error::CoreError;
use chronicle_core::user::{AuthenticatedUser, NewUser};
use chronicle_store::repositories::UserRepo;

use crate::auth::password::verify_password;
use crate::auth::session::{clear_session_cookie, generate_session_token, session_cookie};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /login
///
/// Authenticate with username + password and set the session cookie.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<NewUser>,
) -> AppResult<impl IntoResponse> {
    let invalid = || {
        AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        ))
    };

    let user = UserRepo::find_by_username(&state.store, &input.username).ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(username = %input.username, "Rejected login");
        return Err(invalid());
    }

    let cookie = start_session(&state, &user.id)?;
    tracing::info!(user_id = %user.id, "User logged in");

    Ok(([(SET_COOKIE, cookie)], Json(AuthenticatedUser::from(&user))))
}

/// GET /current-user
///
/// The user behind the session cookie. A missing or invalid session, or one
/// naming a user that no longer exists, is 404.
pub async fn current_user(
    State(state): State<AppState>,
    auth: Result<AuthUser, AppError>,
) -> AppResult<Json<AuthenticatedUser>> {
    let not_found = |id: String| AppError::Core(CoreError::NotFound { entity: "User", id });

    let auth = auth.map_err(|_| not_found("current".into()))?;
    let user = UserRepo::find_by_id(&state.store, &auth.user_id)
        .ok_or_else(|| not_found(auth.user_id.clone()))?;

    Ok(Json(AuthenticatedUser::from(&user)))
}

/// POST /logout
///
/// Clear the session cookie. Always succeeds.
pub async fn logout() -> impl IntoResponse {
    [(SET_COOKIE, clear_session_cookie())]
}

/// Sign a session token for `user_id` and wrap it in a `Set-Cookie` value.
pub(crate) fn start_session(state: &AppState, user_id: &str) -> AppResult<HeaderValue> {
    let token = generate_session_token(user_id, &state.config.session)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    session_cookie(&token, &state.config.session)
        .map_err(|e| AppError::InternalError(format!("Cookie encoding error: {e}")))
}
