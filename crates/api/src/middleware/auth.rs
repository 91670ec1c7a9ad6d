//! Session-cookie authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use chronicle_core::error::CoreError;

use crate::auth::session::{session_token_from_headers, validate_session_token};
use crate::error::AppError;
use crate::state::AppState;

/// The user id carried by a valid session cookie.
///
/// Rejects with 401 when the cookie is missing, tampered with, or expired.
/// Handlers that need a different status can take `Result<AuthUser, AppError>`
/// instead.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token_from_headers(&parts.headers).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Missing session cookie".into()))
        })?;

        let claims = validate_session_token(token, &state.config.session).map_err(|e| {
            tracing::debug!(error = %e, "Rejected session token");
            AppError::Core(CoreError::Unauthorized("Invalid or expired session".into()))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
        })
    }
}
