use serde::Deserialize;

/// Request body for the role-change endpoint. The role arrives as a raw
/// string so an unknown value maps to a validation error instead of a
/// deserialization failure.
#[derive(Debug, Deserialize)]
pub struct ChangeRoleRequest {
    pub role: String,
}
