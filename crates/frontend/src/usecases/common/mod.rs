//! Pieces shared by the RFID scan screens

pub mod scan_input;
pub mod scan_table;

pub use scan_input::ScanInput;
pub use scan_table::ScanSessionPanel;

use crate::shared::http::ApiError;
use chrono::Utc;
use contracts::domain::a003_rfid_garment::{ScanResponse, ScanStatus};
use contracts::usecases::common::ScanSession;
use leptos::prelude::*;

/// Record the backend answer for a submitted code.
///
/// `success` is the status recorded when the backend accepted the code.
pub fn complete_scan(
    session: RwSignal<ScanSession>,
    code: &str,
    success: ScanStatus,
    result: Result<ScanResponse, ApiError>,
) {
    let (status, message) = scan_outcome(success, result);
    if status == ScanStatus::Failed {
        log::warn!("scan of {} failed: {}", code, message);
    }
    record_result(session, code, status, message);
}

/// Store the outcome of a submitted code, unless the session was cleared
/// while the request was in flight.
pub fn record_result(
    session: RwSignal<ScanSession>,
    code: &str,
    status: ScanStatus,
    message: String,
) {
    let applied = session.try_update(|s| s.complete(code, status, message, Utc::now()));
    if applied == Some(false) {
        log::debug!("result for {} dropped, session was cleared", code);
    }
}

fn scan_outcome(
    success: ScanStatus,
    result: Result<ScanResponse, ApiError>,
) -> (ScanStatus, String) {
    match result {
        Ok(resp) if resp.success => {
            let message = if resp.message.is_empty() {
                "OK".to_string()
            } else {
                resp.message
            };
            (success, message)
        }
        Ok(resp) => (ScanStatus::Failed, resp.failure_message()),
        Err(e) => (ScanStatus::Failed, e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_outcome() {
        let ok = ScanResponse {
            success: true,
            message: String::new(),
        };
        assert_eq!(
            scan_outcome(ScanStatus::Registered, Ok(ok)),
            (ScanStatus::Registered, "OK".to_string())
        );

        let refused = ScanResponse {
            success: false,
            message: "Tag already registered".into(),
        };
        assert_eq!(
            scan_outcome(ScanStatus::Registered, Ok(refused)),
            (ScanStatus::Failed, "Tag already registered".to_string())
        );

        assert_eq!(
            scan_outcome(ScanStatus::Rejected, Err(ApiError::Timeout)),
            (ScanStatus::Failed, "Request timed out".to_string())
        );
    }
}
