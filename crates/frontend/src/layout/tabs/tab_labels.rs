//! Tab titles.
//!
//! Use cases take their title from `UseCaseMetadata`; everything else is
//! listed here.

use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_rfid_registration::RfidRegistration;
use contracts::usecases::u502_rfid_checking::RfidChecking;
use contracts::usecases::u503_rfid_reject::RfidReject;

/// Readable title for a tab key
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Dashboards (d4xx) ─────────────────────────────────────────────
        "d400_line_tracking" => "Line tracking",
        "d401_factory_overview" => "Factory overview",

        // ── Aggregates (a0xx) ─────────────────────────────────────────────
        "a001_production_line" => "Line settings",
        "a002_work_order" => "Work order",

        // ── Use Cases (u5xx) ──────────────────────────────────────────────
        "u501_rfid_registration" => RfidRegistration::display_name(),
        "u502_rfid_checking" => RfidChecking::display_name(),
        "u503_rfid_reject" => RfidReject::display_name(),

        _ => "Unknown page",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usecase_labels_match_metadata() {
        assert_eq!(
            tab_label_for_key(&RfidRegistration::full_name()),
            RfidRegistration::display_name()
        );
        assert_eq!(
            tab_label_for_key(&RfidReject::full_name()),
            RfidReject::display_name()
        );
        assert_eq!(tab_label_for_key("x"), "Unknown page");
    }
}
