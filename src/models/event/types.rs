use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EventRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub event_date: String,
    pub location: String,
    pub mandatory: bool,
    pub include_leadership: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCommissionRef {
    pub commission_id: i64,
    pub commission_name: String,
}

/// Event with its linked commissions.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub mandatory: bool,
    pub include_leadership: bool,
    pub commissions: Vec<EventCommissionRef>,
    pub created_at: String,
    pub updated_at: String,
}

impl EventDetail {
    pub fn from_row(row: EventRow, commissions: Vec<EventCommissionRef>) -> Self {
        EventDetail {
            id: row.id,
            name: row.name,
            description: row.description,
            date: row.event_date,
            location: row.location,
            mandatory: row.mandatory,
            include_leadership: row.include_leadership,
            commissions,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Create/update event request. `date` is required on create; an update
/// without it keeps the stored date.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub mandatory: Option<bool>,
    pub include_leadership: Option<bool>,
    /// Commission ids whose members form the invited roster.
    pub commissions: Option<Vec<i64>>,
}
