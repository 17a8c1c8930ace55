use serde::{Deserialize, Serialize};

/// Raw member row joined with its optional district role.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MemberRoleRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub created_at: String,
    pub updated_at: String,
    pub role_id: Option<i64>,
    pub role_name: Option<String>,
    pub role_description: Option<String>,
    pub role_sort_order: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictRoleRef {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub sort_order: i64,
}

/// A member's commission membership, with the optional free-text duty.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCommission {
    pub membership_id: i64,
    pub commission_id: i64,
    pub commission_name: String,
    pub duty: String,
}

/// A neighborhood the member is responsible for.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberNeighborhood {
    pub neighborhood_id: i64,
    pub neighborhood_name: String,
}

/// Fully-detailed member record: identity, role, commission memberships and
/// neighborhood responsibilities.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDetail {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub district_role: Option<DistrictRoleRef>,
    pub commissions: Vec<MemberCommission>,
    pub neighborhoods: Vec<MemberNeighborhood>,
    pub created_at: String,
    pub updated_at: String,
}

impl MemberDetail {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Create/update member request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub district_role_id: Option<i64>,
    /// Neighborhood ids the member is responsible for; replaces existing
    /// links on update.
    pub neighborhoods: Option<Vec<i64>>,
}

/// One row of a member's attendance history, joined with the event.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberAttendanceEntry {
    pub record_id: i64,
    pub event_id: i64,
    pub event_name: String,
    pub event_date: String,
    pub location: String,
    pub mandatory: bool,
    pub status: String,
    pub attended: bool,
    pub updated_at: String,
}

/// Per-member participation statistics. The rate only counts mandatory
/// events — a different formula from the per-event roster rate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStats {
    pub total: i64,
    pub came: i64,
    pub excused: i64,
    pub absent: i64,
    pub mandatory_total: i64,
    pub mandatory_came: i64,
    pub participation_rate: i64,
}

/// Member detail response: full record plus attendance history and stats.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDetailResponse {
    #[serde(flatten)]
    pub member: MemberDetail,
    pub attendance: Vec<MemberAttendanceEntry>,
    pub stats: MemberStats,
}
