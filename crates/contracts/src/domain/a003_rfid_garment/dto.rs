use crate::domain::a002_work_order::WorkOrder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a single scan in a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanStatus {
    Registered,
    Checked,
    Rejected,
    /// Already scanned in this session; not sent again
    Duplicate,
    Failed,
}

impl ScanStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ScanStatus::Registered => "Registered",
            ScanStatus::Checked => "Checked",
            ScanStatus::Rejected => "Rejected",
            ScanStatus::Duplicate => "Duplicate",
            ScanStatus::Failed => "Failed",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(
            self,
            ScanStatus::Registered | ScanStatus::Checked | ScanStatus::Rejected
        )
    }
}

/// One row of a scan session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RfidScanRecord {
    pub rfid: String,
    pub timestamp: DateTime<Utc>,
    pub status: ScanStatus,
    pub message: String,
}

/// Body of `POST /api/garments/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterGarmentRequest {
    pub rfid: String,
    pub line_id: String,
    #[serde(flatten)]
    pub work_order: WorkOrder,
}

/// Body of `POST /api/garments/scrap`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapGarmentRequest {
    pub rfid: String,
    pub line_id: String,
    pub reason: String,
}

/// Generic acknowledgement returned by POST endpoints
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScanResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl ScanResponse {
    /// Message for a refused request; the backend may leave it empty.
    pub fn failure_message(&self) -> String {
        if self.message.trim().is_empty() {
            "Rejected by server".to_string()
        } else {
            self.message.clone()
        }
    }
}

/// Result of `GET /api/rfid/{code}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RfidLookup {
    pub rfid: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub line_id: Option<String>,
    #[serde(default)]
    pub last_station: Option<String>,
    #[serde(default)]
    pub work_order: Option<WorkOrder>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl RfidLookup {
    pub fn found(&self) -> bool {
        !self.status.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_is_flat() {
        let req = RegisterGarmentRequest {
            rfid: "E200".into(),
            line_id: "L01".into(),
            work_order: WorkOrder {
                wo: "WO-1".into(),
                style: "ST".into(),
                buyer: "B".into(),
                item: "I".into(),
                color: "C".into(),
                size: "S".into(),
            },
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["rfid"], "E200");
        assert_eq!(json["wo"], "WO-1");
        assert_eq!(json["size"], "S");
    }

    #[test]
    fn test_scan_response_defaults() {
        let resp: ScanResponse = serde_json::from_str("{}").unwrap();
        assert!(!resp.success);
        assert!(resp.message.is_empty());
        assert_eq!(resp.failure_message(), "Rejected by server");

        let refused: ScanResponse =
            serde_json::from_str(r#"{"success":false,"message":"Line is stopped"}"#).unwrap();
        assert_eq!(refused.failure_message(), "Line is stopped");
    }

    #[test]
    fn test_lookup_found() {
        let lookup: RfidLookup =
            serde_json::from_str(r#"{"rfid":"E200","status":"QC_GOOD","last_station":"QC"}"#)
                .unwrap();
        assert!(lookup.found());
        assert_eq!(lookup.last_station.as_deref(), Some("QC"));

        let missing: RfidLookup = serde_json::from_str(r#"{"rfid":"E201"}"#).unwrap();
        assert!(!missing.found());
    }

    #[test]
    fn test_status_success() {
        assert!(ScanStatus::Registered.is_success());
        assert!(!ScanStatus::Duplicate.is_success());
        assert!(!ScanStatus::Failed.is_success());
    }
}
