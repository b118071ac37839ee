use sqlx::PgPool;
use uuid::Uuid;

use crate::admin::repo_types::AdminAction;

impl AdminAction {
    /// Insert an audit row. Callers treat failure as non-fatal: the
    /// triggering mutation has already committed and must not roll back.
    pub async fn record(
        db: &PgPool,
        actor_id: Uuid,
        action: &str,
        target_id: Uuid,
        target_kind: &str,
        details: serde_json::Value,
    ) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO admin_actions (actor_id, action, target_id, target_kind, details)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(actor_id)
        .bind(action)
        .bind(target_id)
        .bind(target_kind)
        .bind(details)
        .execute(db)
        .await?;
        Ok(())
    }
}
