pub mod auth;
pub mod health;
pub mod posts;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// ```text
/// /posts                 list (?period=), create, replace
/// /posts/{id}            get
///
/// /users                 sign up (sets session cookie)
///
/// /login                 log in (sets session cookie)
/// /current-user          user behind the session cookie
/// /logout                clear the session cookie
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/posts", posts::router())
        .nest("/users", users::router())
        .merge(auth::router())
}
