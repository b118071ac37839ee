use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::auth::extractors::{AdminUser, AuthUser};
use crate::auth::permissions::is_author_or_admin;
use crate::blogs::dto::{
    BlogListResponse, BlogResponse, CreateBlogRequest, ListQuery, UpdateBlogRequest,
};
use crate::blogs::repo_types::Blog;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/blogs", get(list_blogs))
        .route("/blogs/all", get(list_all_blogs))
        .route("/blogs/create", post(create_blog))
        .route(
            "/blogs/:id",
            get(get_blog).put(update_blog).delete(delete_blog),
        )
}

fn total_pages(total: i64, limit: i64) -> i64 {
    (total + limit - 1) / limit
}

#[instrument(skip(state))]
pub async fn list_blogs(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<BlogListResponse>> {
    let page = query.page.max(1);
    let limit = query.limit.max(1);
    let pattern = format!("%{}%", query.q.trim());

    let total = Blog::count(&state.db, &pattern).await?;
    let rows = Blog::list(&state.db, &pattern, limit, (page - 1) * limit).await?;

    Ok(Json(BlogListResponse {
        page,
        limit,
        total,
        total_pages: total_pages(total, limit),
        data: rows.into_iter().map(BlogResponse::from).collect(),
    }))
}

/// Admin-only: every blog, unpaginated.
#[instrument(skip(state))]
pub async fn list_all_blogs(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> ApiResult<Json<Vec<BlogResponse>>> {
    let rows = Blog::list_all(&state.db).await?;
    Ok(Json(rows.into_iter().map(BlogResponse::from).collect()))
}

#[instrument(skip(state, payload))]
pub async fn create_blog(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Json(payload): Json<CreateBlogRequest>,
) -> ApiResult<(StatusCode, Json<Blog>)> {
    validate_title(&payload.title)?;
    validate_content(&payload.content)?;

    let blog = Blog::create(
        &state.db,
        identity.id,
        payload.title.trim(),
        payload.content.trim(),
        payload.image.as_deref(),
    )
    .await?;

    info!(blog_id = %blog.id, author = %identity.id, "blog created");
    Ok((StatusCode::CREATED, Json(blog)))
}

#[instrument(skip(state))]
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<BlogResponse>> {
    let row = Blog::find_with_author(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Blog not found".into()))?;
    Ok(Json(BlogResponse::from(row)))
}

#[instrument(skip(state, payload))]
pub async fn update_blog(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBlogRequest>,
) -> ApiResult<Json<Blog>> {
    let blog = Blog::find(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Blog not found".into()))?;

    if !is_author_or_admin(&identity, blog.author_id) {
        warn!(blog_id = %id, user_id = %identity.id, "update forbidden");
        return Err(ApiError::Forbidden("Not author or admin".into()));
    }

    if let Some(title) = &payload.title {
        validate_title(title)?;
    }
    if let Some(content) = &payload.content {
        validate_content(content)?;
    }

    let blog = Blog::update(
        &state.db,
        id,
        payload.title.as_deref().map(str::trim),
        payload.content.as_deref().map(str::trim),
        payload.image.as_deref(),
    )
    .await?;

    info!(blog_id = %blog.id, user_id = %identity.id, "blog updated");
    Ok(Json(blog))
}

#[instrument(skip(state))]
pub async fn delete_blog(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    let blog = Blog::find(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Blog not found".into()))?;

    if !is_author_or_admin(&identity, blog.author_id) {
        warn!(blog_id = %id, user_id = %identity.id, "delete forbidden");
        return Err(ApiError::Forbidden("Not author or admin".into()));
    }

    Blog::delete(&state.db, id).await?;

    info!(blog_id = %id, user_id = %identity.id, "blog deleted");
    Ok(Json(json!({ "message": "Blog removed" })))
}

fn validate_title(title: &str) -> ApiResult<()> {
    if title.trim().len() < 3 {
        return Err(ApiError::Validation(
            "Title must be at least 3 characters".into(),
        ));
    }
    Ok(())
}

fn validate_content(content: &str) -> ApiResult<()> {
    if content.trim().len() < 10 {
        return Err(ApiError::Validation(
            "Content must be at least 10 characters".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::repo_types::{Identity, Role};

    fn identity() -> Identity {
        Identity {
            id: Uuid::new_v4(),
            username: "alice".into(),
            email: "a@x.com".into(),
            role: Role::User,
        }
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn title_and_content_minimums() {
        assert!(validate_title("ab").is_err());
        assert!(validate_title("   abc").is_ok());
        assert!(validate_content("too short").is_err());
        assert!(validate_content("long enough content").is_ok());
    }

    #[tokio::test]
    async fn create_rejects_short_title_before_any_write() {
        let state = AppState::fake();
        let payload = CreateBlogRequest {
            title: "ab".into(),
            content: "content long enough to pass".into(),
            image: None,
        };
        let err = create_blog(State(state), AuthUser(identity()), Json(payload))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn create_rejects_short_content_before_any_write() {
        let state = AppState::fake();
        let payload = CreateBlogRequest {
            title: "A fine title".into(),
            content: "short".into(),
            image: None,
        };
        let err = create_blog(State(state), AuthUser(identity()), Json(payload))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Content must be at least 10 characters");
    }
}
