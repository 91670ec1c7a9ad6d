//! Route definitions for the `/posts` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::posts;
use crate::state::AppState;

/// Routes mounted at `/posts`.
///
/// ```text
/// GET    /        -> list_posts
/// POST   /        -> create_post (requires session)
/// PUT    /        -> update_post (requires session)
/// GET    /{id}    -> get_post
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(posts::list_posts)
                .post(posts::create_post)
                .put(posts::update_post),
        )
        .route("/{id}", get(posts::get_post))
}
