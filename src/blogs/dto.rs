use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::repo_types::Role;
use crate::blogs::repo_types::BlogWithAuthor;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
    /// Case-insensitive substring over title and content.
    #[serde(default)]
    pub q: String,
}

fn default_page() -> i64 {
    1
}
fn default_limit() -> i64 {
    10
}

#[derive(Debug, Deserialize)]
pub struct CreateBlogRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BlogAuthor {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Serialize)]
pub struct BlogResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub author: BlogAuthor,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl From<BlogWithAuthor> for BlogResponse {
    fn from(row: BlogWithAuthor) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
            image: row.image,
            author: BlogAuthor {
                id: row.author_id,
                username: row.author_username,
                email: row.author_email,
                role: row.author_role,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BlogListResponse {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
    pub data: Vec<BlogResponse>,
}
