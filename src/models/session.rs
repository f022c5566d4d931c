//! VPN session history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::SessionStatus;

/// Largest page size the sessions endpoint accepts.
pub const MAX_SESSIONS_PAGE_SIZE: u32 = 100;

/// A single VPN connection by a user's device.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Unique session ID
    pub id: String,
    /// User that connected
    #[serde(default)]
    pub user_id: Option<String>,
    /// Device that connected
    #[serde(default)]
    pub device_id: Option<String>,
    /// Session state
    pub status: SessionStatus,
    /// When the tunnel came up
    #[serde(default)]
    pub started_date_time: Option<DateTime<Utc>>,
    /// When the tunnel went down
    #[serde(default)]
    pub ended_date_time: Option<DateTime<Utc>>,
    /// Region the session terminated in
    #[serde(default)]
    pub vpn_region_id: Option<String>,
    /// Client's public address
    #[serde(default)]
    pub origin_public_ip: Option<String>,
    /// Bytes received by the client
    #[serde(default)]
    pub bytes_in: Option<u64>,
    /// Bytes sent by the client
    #[serde(default)]
    pub bytes_out: Option<u64>,
}

/// A cursor-addressed page of sessions.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionsPage {
    /// Sessions in this page
    #[serde(default)]
    pub sessions: Vec<Session>,
    /// Cursor for the next page, absent on the last page
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Filters for listing sessions.
///
/// `size` has no default: it must be set explicitly and lie in
/// `1..=MAX_SESSIONS_PAGE_SIZE`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionsQuery {
    /// Page size
    pub size: u32,
    /// Only sessions started at or after this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    /// Only sessions started before this time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    /// Only sessions in this state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SessionStatus>,
    /// Cursor from a previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl SessionsQuery {
    /// A query for pages of `size` sessions.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            start_date: None,
            end_date: None,
            status: None,
            cursor: None,
        }
    }

    /// Restrict to sessions started in `[start, end)`.
    pub fn between(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Restrict to sessions in one state.
    pub fn with_status(mut self, status: SessionStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Continue from a cursor.
    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sessions_page_deserialize() {
        let page: SessionsPage = serde_json::from_value(serde_json::json!({
            "sessions": [{
                "id": "s-1",
                "userId": "u-1",
                "status": "COMPLETED",
                "startedDateTime": "2024-03-01T12:00:00Z",
                "bytesIn": 1024
            }],
            "nextCursor": "abc"
        }))
        .unwrap();
        assert_eq!(page.sessions[0].status, SessionStatus::Completed);
        assert_eq!(page.sessions[0].bytes_in, Some(1024));
        assert_eq!(page.next_cursor.as_deref(), Some("abc"));
    }

    #[test]
    fn test_query_serialize() {
        let query = SessionsQuery::new(50).with_status(SessionStatus::Active);
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value, serde_json::json!({"size": 50, "status": "ACTIVE"}));
    }
}
