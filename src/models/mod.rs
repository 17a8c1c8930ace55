pub mod attendance;
pub mod commission;
pub mod district_role;
pub mod event;
pub mod member;
pub mod neighborhood;

use serde::Serialize;

/// API error response body.
#[derive(Serialize, Debug)]
pub struct ApiErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Confirmation body for deletions and bulk operations.
#[derive(Serialize, Debug)]
pub struct ApiMessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl ApiMessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        ApiMessageResponse {
            message: message.into(),
            count: None,
        }
    }

    pub fn with_count(message: impl Into<String>, count: usize) -> Self {
        ApiMessageResponse {
            message: message.into(),
            count: Some(count),
        }
    }
}

/// Current timestamp in the same second-resolution RFC 3339 shape the
/// schema defaults use.
pub(crate) fn now_timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}
