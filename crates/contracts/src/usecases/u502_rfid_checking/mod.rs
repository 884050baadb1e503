use crate::domain::a003_rfid_garment::RfidLookup;
use crate::usecases::common::UseCaseMetadata;

pub struct RfidChecking;

impl UseCaseMetadata for RfidChecking {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "rfid_checking"
    }

    fn display_name() -> &'static str {
        "RFID checking"
    }

    fn description() -> &'static str {
        "Look up where a tagged garment is and what it belongs to"
    }
}

/// One-line description of a lookup for the session table
pub fn describe_lookup(lookup: &RfidLookup) -> String {
    let mut parts = vec![lookup.status.trim().to_string()];
    if let Some(line) = lookup.line_id.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("line {line}"));
    }
    if let Some(station) = lookup.last_station.as_deref().filter(|s| !s.is_empty()) {
        parts.push(format!("at {station}"));
    }
    if let Some(wo) = &lookup.work_order {
        let summary = wo.summary();
        if !summary.is_empty() {
            parts.push(summary);
        }
    }
    parts.join(" · ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_work_order::WorkOrder;

    #[test]
    fn test_describe_lookup() {
        let lookup = RfidLookup {
            rfid: "E200".into(),
            status: "registered".into(),
            line_id: Some("L01".into()),
            last_station: Some("PQC".into()),
            work_order: Some(WorkOrder {
                wo: "WO-9".into(),
                style: "POLO".into(),
                ..Default::default()
            }),
            timestamp: None,
        };
        assert_eq!(
            describe_lookup(&lookup),
            "registered · line L01 · at PQC · WO-9 / POLO"
        );
    }

    #[test]
    fn test_describe_lookup_status_only() {
        let lookup: RfidLookup =
            serde_json::from_str(r#"{"rfid":"E200","status":"scrapped"}"#).unwrap();
        assert!(lookup.found());
        assert_eq!(describe_lookup(&lookup), "scrapped");
    }
}
