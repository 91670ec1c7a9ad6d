//! Route definitions for session management.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Session routes, merged at the root.
///
/// ```text
/// POST /login         -> login
/// GET  /current-user  -> current_user
/// POST /logout        -> logout
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/current-user", get(auth::current_user))
        .route("/logout", post(auth::logout))
}
