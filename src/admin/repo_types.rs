use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Append-only audit record of a privileged mutation.
///
/// Rows are only ever inserted; there is no update or delete path, and the
/// actor column carries no FK so the trail survives actor deletion.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AdminAction {
    pub id: Uuid,
    pub actor_id: Uuid,
    pub action: String,
    pub target_id: Uuid,
    pub target_kind: String,
    pub details: serde_json::Value,
    pub created_at: OffsetDateTime,
}
