//! Tracking counters for one production line (`GET /api/tracking/{line_id}`)

use crate::domain::common::lenient_count;
use serde::{Deserialize, Serialize};

/// Full counter snapshot. Every field is lenient: see [`lenient_count`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingCounters {
    #[serde(default, deserialize_with = "lenient_count")]
    pub qc_good: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub qc_rework: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub qc_reject: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub qc_wira: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub pqc_good: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub pqc_rework: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub pqc_reject: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub pqc_wira: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub output: u64,
}

/// Counters of one inspection stage (QC or PQC)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageCounters {
    pub good: u64,
    pub rework: u64,
    pub reject: u64,
    pub wira: u64,
}

impl StageCounters {
    pub fn total(&self) -> u64 {
        self.good
            .saturating_add(self.rework)
            .saturating_add(self.reject)
            .saturating_add(self.wira)
    }

    /// Share of good pieces in %, `None` when nothing was inspected
    pub fn pass_rate(&self) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            None
        } else {
            Some(self.good as f64 * 100.0 / total as f64)
        }
    }
}

impl TrackingCounters {
    /// Interpret a raw response.
    ///
    /// Not found, an empty body and a malformed body all mean "no output yet"
    /// and produce zeros. Any other non-2xx status is returned as `Err(status)`
    /// so the caller keeps the last good snapshot.
    pub fn from_response(status: u16, body: &str) -> Result<Self, u16> {
        match status {
            404 => Ok(Self::default()),
            200..=299 => Ok(Self::from_body(body)),
            _ => Err(status),
        }
    }

    pub fn from_body(body: &str) -> Self {
        let body = body.trim();
        if body.is_empty() {
            return Self::default();
        }
        match serde_json::from_str::<serde_json::Value>(body) {
            // Some deployments wrap the payload as `{"data": {...}}`
            Ok(serde_json::Value::Object(map)) => {
                let wrapped = map.get("data").is_some_and(serde_json::Value::is_object);
                let inner = if wrapped {
                    map["data"].clone()
                } else {
                    serde_json::Value::Object(map)
                };
                serde_json::from_value(inner).unwrap_or_default()
            }
            _ => Self::default(),
        }
    }

    pub fn qc(&self) -> StageCounters {
        StageCounters {
            good: self.qc_good,
            rework: self.qc_rework,
            reject: self.qc_reject,
            wira: self.qc_wira,
        }
    }

    pub fn pqc(&self) -> StageCounters {
        StageCounters {
            good: self.pqc_good,
            rework: self.pqc_rework,
            reject: self.pqc_reject,
            wira: self.pqc_wira,
        }
    }

    /// Output against the line target in %, `None` without a target
    pub fn efficiency(&self, target: u64) -> Option<f64> {
        if target == 0 {
            None
        } else {
            Some(self.output as f64 * 100.0 / target as f64)
        }
    }

    /// Pieces still missing to reach the target
    pub fn remaining(&self, target: u64) -> u64 {
        target.saturating_sub(self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_values_are_kept() {
        let c = TrackingCounters::from_body(
            r#"{"qc_good":120,"qc_rework":7,"qc_reject":2,"qc_wira":1,
                "pqc_good":110,"pqc_rework":3,"pqc_reject":1,"pqc_wira":0,"output":105}"#,
        );
        assert_eq!(c.qc_good, 120);
        assert_eq!(c.qc_rework, 7);
        assert_eq!(c.qc_reject, 2);
        assert_eq!(c.qc_wira, 1);
        assert_eq!(c.pqc().total(), 114);
        assert_eq!(c.output, 105);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let c = TrackingCounters::from_body(r#"{"qc_good":"15"}"#);
        assert_eq!(c.qc_good, 15);
        assert_eq!(c.qc_reject, 0);
        assert_eq!(c.output, 0);
    }

    #[test]
    fn test_malformed_or_empty_is_zero() {
        assert_eq!(TrackingCounters::from_body(""), TrackingCounters::default());
        assert_eq!(TrackingCounters::from_body("null"), TrackingCounters::default());
        assert_eq!(TrackingCounters::from_body("[1,2]"), TrackingCounters::default());
        assert_eq!(TrackingCounters::from_body("{oops"), TrackingCounters::default());
        assert_eq!(
            TrackingCounters::from_response(404, r#"{"qc_good":5}"#),
            Ok(TrackingCounters::default())
        );
        assert_eq!(
            TrackingCounters::from_response(204, ""),
            Ok(TrackingCounters::default())
        );
    }

    #[test]
    fn test_server_errors_are_not_zeros() {
        assert_eq!(TrackingCounters::from_response(500, r#"{"qc_good":5}"#), Err(500));
        assert_eq!(TrackingCounters::from_response(503, r#"{"qc_good":5}"#), Err(503));
        assert_eq!(TrackingCounters::from_response(401, ""), Err(401));
    }

    #[test]
    fn test_huge_counters_saturate() {
        let c = TrackingCounters::from_body(r#"{"qc_good":1e30,"qc_rework":5,"qc_wira":"7"}"#);
        assert_eq!(c.qc_good, u64::MAX);
        assert_eq!(c.qc().total(), u64::MAX);
        assert_eq!(c.qc().pass_rate(), Some(100.0));
    }

    #[test]
    fn test_wrapped_payload() {
        let c = TrackingCounters::from_response(200, r#"{"data":{"output":"42","qc_good":40}}"#)
            .unwrap();
        assert_eq!(c.output, 42);
        assert_eq!(c.qc_good, 40);
    }

    #[test]
    fn test_rates() {
        let c = TrackingCounters {
            qc_good: 90,
            qc_rework: 6,
            qc_reject: 3,
            qc_wira: 1,
            output: 250,
            ..Default::default()
        };
        assert_eq!(c.qc().pass_rate(), Some(90.0));
        assert_eq!(c.pqc().pass_rate(), None);
        assert_eq!(c.efficiency(500), Some(50.0));
        assert_eq!(c.efficiency(0), None);
        assert_eq!(c.remaining(500), 250);
        assert_eq!(c.remaining(200), 0);
    }
}
