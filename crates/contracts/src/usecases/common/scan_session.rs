//! In-memory scan session shared by the RFID screens.
//!
//! A code is reserved as soon as it is accepted for submission, so a second
//! read of the same tag while the first request is still in flight is flagged
//! as a duplicate instead of being posted twice. A failed submission releases
//! the code so the operator can scan it again. Results that arrive after the
//! session was cleared are dropped.

use crate::domain::a003_rfid_garment::{normalize_rfid, RfidScanRecord, ScanStatus};
use crate::domain::common::ValidationError;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// What to do with a freshly read code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanDecision {
    /// New code, reserved; send it to the backend
    Submit(String),
    /// Already seen in this session; a `Duplicate` row was recorded
    Duplicate(String),
    /// Unusable input; nothing was recorded
    Invalid(ValidationError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub total: usize,
    pub succeeded: usize,
    pub duplicates: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanSession {
    records: Vec<RfidScanRecord>,
    reserved: HashSet<String>,
    /// Submitted codes still waiting for the backend
    pending: HashSet<String>,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, raw: &str, now: DateTime<Utc>) -> ScanDecision {
        let code = match normalize_rfid(raw) {
            Ok(code) => code,
            Err(e) => return ScanDecision::Invalid(e),
        };

        if !self.reserved.insert(code.clone()) {
            self.records.push(RfidScanRecord {
                rfid: code.clone(),
                timestamp: now,
                status: ScanStatus::Duplicate,
                message: "Already scanned in this session".to_string(),
            });
            return ScanDecision::Duplicate(code);
        }

        self.pending.insert(code.clone());
        ScanDecision::Submit(code)
    }

    /// Record the backend outcome for a code returned by [`ScanSession::begin`].
    ///
    /// Returns false, recording nothing, when the code is not awaiting a result
    /// (the session was cleared meanwhile, or the result came twice).
    pub fn complete(
        &mut self,
        rfid: &str,
        status: ScanStatus,
        message: impl Into<String>,
        now: DateTime<Utc>,
    ) -> bool {
        if !self.pending.remove(rfid) {
            return false;
        }
        if !status.is_success() {
            self.reserved.remove(rfid);
        }
        self.records.push(RfidScanRecord {
            rfid: rfid.to_string(),
            timestamp: now,
            status,
            message: message.into(),
        });
        true
    }

    pub fn contains(&self, rfid: &str) -> bool {
        self.reserved.contains(rfid)
    }

    /// Records in scan order
    pub fn records(&self) -> &[RfidScanRecord] {
        &self.records
    }

    /// Records newest first, for display
    pub fn latest_first(&self) -> Vec<RfidScanRecord> {
        self.records.iter().rev().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self) -> SessionSummary {
        let mut summary = SessionSummary {
            total: self.records.len(),
            ..Default::default()
        };
        for record in &self.records {
            match record.status {
                ScanStatus::Duplicate => summary.duplicates += 1,
                ScanStatus::Failed => summary.failed += 1,
                _ => summary.succeeded += 1,
            }
        }
        summary
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.reserved.clear();
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(sec: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 6, 8, 0, sec).unwrap()
    }

    #[test]
    fn test_duplicate_is_flagged_not_resubmitted() {
        let mut s = ScanSession::new();
        assert_eq!(s.begin("e200aa", at(0)), ScanDecision::Submit("E200AA".into()));
        s.complete("E200AA", ScanStatus::Registered, "ok", at(1));

        assert_eq!(s.begin(" E200AA ", at(2)), ScanDecision::Duplicate("E200AA".into()));
        let records = s.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].status, ScanStatus::Duplicate);
    }

    #[test]
    fn test_in_flight_code_is_duplicate() {
        let mut s = ScanSession::new();
        assert!(matches!(s.begin("TAG1", at(0)), ScanDecision::Submit(_)));
        assert!(matches!(s.begin("TAG1", at(0)), ScanDecision::Duplicate(_)));
    }

    #[test]
    fn test_failed_code_can_be_retried() {
        let mut s = ScanSession::new();
        assert!(matches!(s.begin("TAG1", at(0)), ScanDecision::Submit(_)));
        s.complete("TAG1", ScanStatus::Failed, "network error", at(1));
        assert!(!s.contains("TAG1"));
        assert_eq!(s.begin("TAG1", at(2)), ScanDecision::Submit("TAG1".into()));
    }

    #[test]
    fn test_result_after_clear_is_dropped() {
        let mut s = ScanSession::new();
        assert!(matches!(s.begin("T1", at(0)), ScanDecision::Submit(_)));
        s.clear();
        assert!(!s.complete("T1", ScanStatus::Registered, "ok", at(1)));
        assert!(s.is_empty());

        // Rescanned after the clear: submitted once, then flagged
        assert_eq!(s.begin("T1", at(2)), ScanDecision::Submit("T1".into()));
        assert!(s.complete("T1", ScanStatus::Registered, "ok", at(3)));
        assert_eq!(s.begin("T1", at(4)), ScanDecision::Duplicate("T1".into()));
    }

    #[test]
    fn test_second_result_for_same_code_is_dropped() {
        let mut s = ScanSession::new();
        s.begin("T1", at(0));
        assert!(s.complete("T1", ScanStatus::Registered, "ok", at(1)));
        assert!(!s.complete("T1", ScanStatus::Failed, "late", at(2)));
        assert_eq!(s.records().len(), 1);
        assert!(s.contains("T1"));
    }

    #[test]
    fn test_invalid_input_records_nothing() {
        let mut s = ScanSession::new();
        assert!(matches!(s.begin("  ", at(0)), ScanDecision::Invalid(_)));
        assert!(matches!(s.begin("A B", at(0)), ScanDecision::Invalid(_)));
        assert!(s.is_empty());
    }

    #[test]
    fn test_summary_and_order() {
        let mut s = ScanSession::new();
        for (i, code) in ["T1", "T2", "T3"].iter().enumerate() {
            if let ScanDecision::Submit(c) = s.begin(code, at(i as u32)) {
                let status = if c == "T3" {
                    ScanStatus::Failed
                } else {
                    ScanStatus::Registered
                };
                s.complete(&c, status, "", at(i as u32));
            }
        }
        s.begin("T1", at(10));

        let summary = s.summary();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.duplicates, 1);
        assert_eq!(s.latest_first()[0].rfid, "T1");
        assert_eq!(s.latest_first()[0].status, ScanStatus::Duplicate);

        s.clear();
        assert!(s.is_empty());
        assert!(!s.contains("T1"));
    }
}
