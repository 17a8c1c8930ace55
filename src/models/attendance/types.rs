use serde::{Deserialize, Serialize};

use super::status::AttendanceStatus;
use crate::models::event::EventRow;
use crate::models::member::MemberDetail;

/// Raw attendance row. `status` holds the canonical note string.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AttendanceRecordRow {
    pub id: i64,
    pub event_id: i64,
    pub member_id: i64,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Attendance annotation attached to a roster member.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceInfo {
    pub record_id: i64,
    pub attended: bool,
    pub status: String,
    pub updated_at: String,
}

/// A roster member with their current attendance status. `attendance` is
/// null while the member's status is undetermined.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberWithAttendance {
    #[serde(flatten)]
    pub member: MemberDetail,
    pub attendance: Option<AttendanceInfo>,
}

/// Per-event attendance summary. `undetermined` is a residual, so the four
/// counts always sum to `total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStats {
    pub total: i64,
    pub came: i64,
    pub excused: i64,
    pub absent: i64,
    pub undetermined: i64,
    pub participation_rate: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub location: String,
    pub description: String,
}

impl From<&EventRow> for EventSummary {
    fn from(row: &EventRow) -> Self {
        EventSummary {
            id: row.id,
            name: row.name.clone(),
            date: row.event_date.clone(),
            location: row.location.clone(),
            description: row.description.clone(),
        }
    }
}

/// Full roster read response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterResponse {
    pub event: EventSummary,
    pub members: Vec<MemberWithAttendance>,
    pub stats: AttendanceStats,
}

/// Single upserted record as returned from the write path.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecordResponse {
    pub id: i64,
    pub event_id: i64,
    pub member_id: i64,
    pub attended: bool,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<AttendanceRecordRow> for AttendanceRecordResponse {
    fn from(row: AttendanceRecordRow) -> Self {
        let attended = AttendanceStatus::from_note(&row.status).attended();
        AttendanceRecordResponse {
            id: row.id,
            event_id: row.event_id,
            member_id: row.member_id,
            attended,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// One status write: `{memberId, status}` with an optional excuse reason.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceWriteItem {
    pub member_id: Option<i64>,
    pub status: Option<String>,
    pub reason: Option<String>,
}

/// Write request body: a single item, or an array for bulk updates.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AttendanceWrite {
    Bulk(Vec<AttendanceWriteItem>),
    Single(AttendanceWriteItem),
}
