use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::repo_types::Role;

/// Blog post record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Blog {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub image: Option<String>, // image URL shown on the card, optional
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Blog row joined with its author's public columns.
#[derive(Debug, Clone, FromRow)]
pub struct BlogWithAuthor {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub author_id: Uuid,
    pub author_username: String,
    pub author_email: String,
    pub author_role: Role,
}
