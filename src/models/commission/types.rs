use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Commission {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CommissionListItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub member_count: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// A commission member with role context and the membership's duty.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CommissionMemberEntry {
    pub membership_id: i64,
    pub member_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub duty: String,
    pub role_name: Option<String>,
}

/// An event the commission is linked to, with its attendance turnout.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CommissionEventEntry {
    pub event_id: i64,
    pub name: String,
    pub event_date: String,
    pub mandatory: bool,
    pub came_count: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionDetail {
    #[serde(flatten)]
    pub commission: Commission,
    pub members: Vec<CommissionMemberEntry>,
    pub events: Vec<CommissionEventEntry>,
}

/// Create/update commission request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionRequest {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
}

/// Add-member request for the membership sub-resource.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionMemberRequest {
    pub member_id: Option<i64>,
    pub duty: Option<String>,
}

/// Duty-update request for an existing membership.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionMemberUpdateRequest {
    pub membership_id: Option<i64>,
    pub duty: Option<String>,
}

/// A membership row as returned from writes.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MembershipRecord {
    pub id: i64,
    pub member_id: i64,
    pub commission_id: i64,
    pub duty: String,
    pub created_at: String,
}
