use axum::{
    extract::{Path, State},
    routing::{delete, get, put},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::admin::dto::ChangeRoleRequest;
use crate::admin::repo_types::AdminAction;
use crate::auth::dto::PublicUser;
use crate::auth::extractors::AdminUser;
use crate::auth::permissions::is_same_id;
use crate::auth::repo_types::{Role, User};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/users", get(list_users))
        .route("/admin/users/:id/role", put(change_role))
        .route("/admin/users/:id", delete(delete_user))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> ApiResult<Json<Vec<PublicUser>>> {
    let users = User::all(&state.db).await?;
    Ok(Json(users.iter().map(PublicUser::from).collect()))
}

#[instrument(skip(state, payload))]
pub async fn change_role(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<ChangeRoleRequest>,
) -> ApiResult<Json<Value>> {
    let role: Role = payload
        .role
        .parse()
        .map_err(|_| ApiError::Validation("Invalid role".into()))?;

    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

    let prev = user.role;
    let user = User::update_role(&state.db, user.id, role).await?;

    if let Err(e) = AdminAction::record(
        &state.db,
        admin.id,
        "change_role",
        user.id,
        "user",
        json!({ "from": prev, "to": role }),
    )
    .await
    {
        warn!(error = %e, "audit log write failed");
    }

    info!(actor = %admin.id, target = %user.id, from = %prev, to = %role, "role updated");
    Ok(Json(json!({
        "message": "Role updated",
        "user": { "id": user.id, "email": user.email, "role": user.role },
    })))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

    if is_same_id(user.id, admin.id) {
        return Err(ApiError::Validation("You cannot delete yourself".into()));
    }

    User::delete(&state.db, user.id).await?;

    if let Err(e) = AdminAction::record(
        &state.db,
        admin.id,
        "delete_user",
        user.id,
        "user",
        json!({ "email": user.email }),
    )
    .await
    {
        warn!(error = %e, "audit log write failed");
    }

    info!(actor = %admin.id, target = %user.id, "user deleted");
    Ok(Json(json!({ "message": "User deleted" })))
}
