use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use tracing::warn;

use crate::auth::jwt::JwtKeys;
use crate::auth::permissions::has_role;
use crate::auth::repo_types::{Identity, Role, User};
use crate::error::ApiError;
use crate::state::AppState;

/// Request gate: bearer token -> verified claims -> live identity.
///
/// The subject is re-fetched from the store on every request, so the
/// attached role is always current even when the token's claim is stale.
/// Handlers downstream never re-verify the token.
#[derive(Debug)]
pub struct AuthUser(pub Identity);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(ApiError::MissingToken)?;

        let token = header
            .strip_prefix("Bearer ")
            .or_else(|| header.strip_prefix("bearer "))
            .ok_or(ApiError::MissingToken)?;

        let keys = JwtKeys::from_ref(state);
        let claims = keys.verify(token).map_err(|e| {
            // reason stays in the logs; the response never distinguishes
            // expired from forged
            warn!(error = %e, "token verification failed");
            ApiError::InvalidToken
        })?;

        let user = User::find_by_id(&state.db, claims.id)
            .await?
            .ok_or(ApiError::UnknownSubject)?;

        Ok(AuthUser(Identity::from(user)))
    }
}

/// Admin-only gate layered on top of [`AuthUser`].
#[derive(Debug)]
pub struct AdminUser(pub Identity);

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(identity) = AuthUser::from_request_parts(parts, state).await?;
        if !has_role(&identity, &[Role::Admin]) {
            return Err(ApiError::Forbidden("Admin access required".into()));
        }
        Ok(AdminUser(identity))
    }
}
