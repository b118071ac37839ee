use sqlx::PgPool;
use uuid::Uuid;

use crate::blogs::repo_types::{Blog, BlogWithAuthor};

const WITH_AUTHOR: &str = r#"
    SELECT b.id, b.title, b.content, b.image, b.created_at, b.updated_at,
           u.id AS author_id, u.username AS author_username,
           u.email AS author_email, u.role AS author_role
    FROM blogs b
    JOIN users u ON u.id = b.author_id
"#;

impl Blog {
    /// Count rows matching the substring filter; `pattern` is already
    /// wrapped in `%` wildcards.
    pub async fn count(db: &PgPool, pattern: &str) -> anyhow::Result<i64> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM blogs WHERE title ILIKE $1 OR content ILIKE $1",
        )
        .bind(pattern)
        .fetch_one(db)
        .await?;
        Ok(total)
    }

    pub async fn list(
        db: &PgPool,
        pattern: &str,
        limit: i64,
        offset: i64,
    ) -> anyhow::Result<Vec<BlogWithAuthor>> {
        let sql = format!(
            "{WITH_AUTHOR}
            WHERE b.title ILIKE $1 OR b.content ILIKE $1
            ORDER BY b.created_at DESC
            LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, BlogWithAuthor>(&sql)
            .bind(pattern)
            .bind(limit)
            .bind(offset)
            .fetch_all(db)
            .await?;
        Ok(rows)
    }

    pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<BlogWithAuthor>> {
        let sql = format!("{WITH_AUTHOR} ORDER BY b.created_at DESC");
        let rows = sqlx::query_as::<_, BlogWithAuthor>(&sql)
            .fetch_all(db)
            .await?;
        Ok(rows)
    }

    pub async fn find(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Blog>> {
        let blog = sqlx::query_as::<_, Blog>(
            r#"
            SELECT id, author_id, title, content, image, created_at, updated_at
            FROM blogs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(blog)
    }

    pub async fn find_with_author(
        db: &PgPool,
        id: Uuid,
    ) -> anyhow::Result<Option<BlogWithAuthor>> {
        let sql = format!("{WITH_AUTHOR} WHERE b.id = $1");
        let row = sqlx::query_as::<_, BlogWithAuthor>(&sql)
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    pub async fn create(
        db: &PgPool,
        author_id: Uuid,
        title: &str,
        content: &str,
        image: Option<&str>,
    ) -> anyhow::Result<Blog> {
        let blog = sqlx::query_as::<_, Blog>(
            r#"
            INSERT INTO blogs (author_id, title, content, image)
            VALUES ($1, $2, $3, $4)
            RETURNING id, author_id, title, content, image, created_at, updated_at
            "#,
        )
        .bind(author_id)
        .bind(title)
        .bind(content)
        .bind(image)
        .fetch_one(db)
        .await?;
        Ok(blog)
    }

    /// Update only the provided fields; `updated_at` is always bumped.
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        title: Option<&str>,
        content: Option<&str>,
        image: Option<&str>,
    ) -> anyhow::Result<Blog> {
        let blog = sqlx::query_as::<_, Blog>(
            r#"
            UPDATE blogs
            SET title = COALESCE($2, title),
                content = COALESCE($3, content),
                image = COALESCE($4, image),
                updated_at = now()
            WHERE id = $1
            RETURNING id, author_id, title, content, image, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(content)
        .bind(image)
        .fetch_one(db)
        .await?;
        Ok(blog)
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }
}
