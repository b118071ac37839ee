use axum::Router;

use crate::state::AppState;

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod jwt;
pub mod password;
pub mod permissions;
pub mod repo;
pub mod repo_types;

pub fn router() -> Router<AppState> {
    handlers::router()
}
