//! Frontend Models
//!
//! Data structures matching the records endpoint.

use serde::{Deserialize, Serialize};

/// One row of dashboard data (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub code: String,
    pub owner: String,
}

/// Locally cached copy of the remote proxy flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProxyState {
    pub enabled: bool,
}

impl ProxyState {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// The state a toggle would ask the server for
    pub fn toggled(self) -> Self {
        Self::new(!self.enabled)
    }

    /// Integer encoding used on the wire: 1 = on, 0 = off
    pub fn wire_value(self) -> u8 {
        if self.enabled { 1 } else { 0 }
    }

    pub fn label(self) -> &'static str {
        if self.enabled { "ON" } else { "OFF" }
    }
}

/// Body of the proxy update request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProxyUpdate {
    pub proxy: u8,
}

impl From<ProxyState> for ProxyUpdate {
    fn from(state: ProxyState) -> Self {
        Self { proxy: state.wire_value() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_decode_in_received_order() {
        let body = r#"[
            {"id": 3, "code": "zzz", "owner": "b"},
            {"id": 1, "code": "abc", "owner": "x"}
        ]"#;

        let records: Vec<Record> = serde_json::from_str(body).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 3);
        assert_eq!(records[1], Record { id: 1, code: "abc".into(), owner: "x".into() });
    }

    #[test]
    fn test_records_decode_ids_outside_u32() {
        let body = r#"[
            {"id": -1, "code": "neg", "owner": "a"},
            {"id": 5000000000, "code": "big", "owner": "b"}
        ]"#;

        let records: Vec<Record> = serde_json::from_str(body).unwrap();

        assert_eq!(records[0].id, -1);
        assert_eq!(records[1].id, 5_000_000_000);
    }

    #[test]
    fn test_records_decode_empty_array() {
        let records: Vec<Record> = serde_json::from_str("[]").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_toggle_from_off_requests_one() {
        let desired = ProxyState::new(false).toggled();
        let body = serde_json::to_string(&ProxyUpdate::from(desired)).unwrap();
        assert_eq!(body, r#"{"proxy":1}"#);
    }

    #[test]
    fn test_toggle_from_on_requests_zero() {
        let desired = ProxyState::new(true).toggled();
        let body = serde_json::to_string(&ProxyUpdate::from(desired)).unwrap();
        assert_eq!(body, r#"{"proxy":0}"#);
    }

    #[test]
    fn test_proxy_label() {
        assert_eq!(ProxyState::default().label(), "OFF");
        assert_eq!(ProxyState::new(true).label(), "ON");
    }
}
