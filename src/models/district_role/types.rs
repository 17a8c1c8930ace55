use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DistrictRole {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub sort_order: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// Create/update district role request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictRoleRequest {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub sort_order: Option<i64>,
}

/// A member holding the role, for the detail view.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RoleHolder {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictRoleDetail {
    #[serde(flatten)]
    pub role: DistrictRole,
    pub members: Vec<RoleHolder>,
}
