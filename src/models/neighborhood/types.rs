use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct NeighborhoodRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub local_office: String,
    pub chair_member_id: Option<i64>,
    pub chair_first_name: Option<String>,
    pub chair_last_name: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborhoodChair {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// A member responsible for the neighborhood.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsibleMember {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborhoodDetail {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub local_office: String,
    pub chair: Option<NeighborhoodChair>,
    pub responsible_members: Vec<ResponsibleMember>,
    pub created_at: String,
    pub updated_at: String,
}

/// Create/update neighborhood request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborhoodRequest {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub local_office: Option<String>,
    pub chair_member_id: Option<i64>,
}
