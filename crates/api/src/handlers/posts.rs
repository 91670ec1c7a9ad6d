//! Handlers for the `/posts` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use chronicle_core::error::CoreError;
use chronicle_core::post::{render_markdown, NewPost, Period, Post, UpdatePost};
use chronicle_core::validation::forms::validate_title;
use chronicle_store::models::post::CreatePost;
use chronicle_store::repositories::PostRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters for `GET /posts`.
#[derive(Debug, Deserialize)]
pub struct ListPostsParams {
    /// `Today`, `This Week`, `This Month` (or their snake_case forms).
    pub period: Option<String>,
}

/// GET /posts
///
/// All posts in insertion order, optionally narrowed to a timeline period.
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<ListPostsParams>,
) -> AppResult<Json<Vec<Post>>> {
    let posts = match params.period.as_deref() {
        Some(raw) => {
            let period: Period = raw.parse()?;
            PostRepo::list_in_period(&state.store, period, Utc::now())
        }
        None => PostRepo::list(&state.store),
    };
    Ok(Json(posts))
}

/// GET /posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Post>> {
    PostRepo::find_by_id(&state.store, &id)
        .map(Json)
        .ok_or_else(|| post_not_found(id))
}

/// POST /posts
///
/// Create a post authored by the session user. `created` defaults to now and
/// an empty `html` is rendered from `markdown`.
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<NewPost>,
) -> AppResult<(StatusCode, Json<Post>)> {
    ensure_title(&input.title)?;
    let html = html_or_rendered(input.html, &input.markdown);

    let post = PostRepo::create(
        &state.store,
        CreatePost {
            title: input.title,
            author_id: auth.user_id,
            created: input.created.unwrap_or_else(Utc::now),
            markdown: input.markdown,
            html,
        },
    );
    tracing::info!(post_id = %post.id, author_id = %post.author_id, "Post created");

    Ok((StatusCode::CREATED, Json(post)))
}

/// PUT /posts
///
/// Replace an existing post in full. Only its author may do so. An empty
/// `html` is rendered from `markdown`.
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(input): AppJson<UpdatePost>,
) -> AppResult<Json<Post>> {
    ensure_title(&input.title)?;

    let existing = PostRepo::find_by_id(&state.store, &input.id)
        .ok_or_else(|| post_not_found(input.id.clone()))?;

    if existing.author_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the author can edit this post".into(),
        )));
    }

    let html = html_or_rendered(input.html, &input.markdown);
    let replacement = Post {
        id: existing.id,
        title: input.title,
        author_id: existing.author_id,
        created: input.created,
        markdown: input.markdown,
        html,
    };

    let post = PostRepo::replace(&state.store, replacement)
        .ok_or_else(|| post_not_found(input.id))?;
    tracing::info!(post_id = %post.id, "Post replaced");

    Ok(Json(post))
}

fn ensure_title(title: &str) -> AppResult<()> {
    let status = validate_title(title);
    match status.message() {
        Some(message) => Err(AppError::Core(CoreError::Validation(format!(
            "title: {message}"
        )))),
        None => Ok(()),
    }
}

fn html_or_rendered(html: String, markdown: &str) -> String {
    if html.is_empty() {
        render_markdown(markdown)
    } else {
        html
    }
}

fn post_not_found(id: String) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Post", id })
}
