use crate::domain::a002_work_order::WorkOrderSelection;
use crate::domain::a003_rfid_garment::RegisterGarmentRequest;
use crate::domain::common::validation::require;
use crate::domain::common::ValidationError;
use crate::usecases::common::UseCaseMetadata;

pub struct RfidRegistration;

impl UseCaseMetadata for RfidRegistration {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "rfid_registration"
    }

    fn display_name() -> &'static str {
        "RFID registration"
    }

    fn description() -> &'static str {
        "Bind scanned tags to the work order running on the line"
    }
}

/// Scanning is only possible once a line and every work-order dropdown are set.
pub fn ready_to_scan(line_id: &str, selection: &WorkOrderSelection) -> Result<(), ValidationError> {
    require(line_id, "Line")?;
    selection.to_work_order().map(|_| ())
}

pub fn register_request(
    rfid: &str,
    line_id: &str,
    selection: &WorkOrderSelection,
) -> Result<RegisterGarmentRequest, ValidationError> {
    require(line_id, "Line")?;
    let work_order = selection.to_work_order()?;
    Ok(RegisterGarmentRequest {
        rfid: rfid.to_string(),
        line_id: line_id.trim().to_string(),
        work_order,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_work_order::{WorkOrder, WorkOrderField};

    #[test]
    fn test_blocked_until_selection_complete() {
        let mut selection = WorkOrderSelection::default();
        assert_eq!(
            ready_to_scan("L01", &selection),
            Err(ValidationError::Required("Work order"))
        );
        selection.set(WorkOrderField::Wo, "WO-1");
        assert_eq!(
            register_request("E200", "L01", &selection),
            Err(ValidationError::Required("Style"))
        );
    }

    #[test]
    fn test_register_request() {
        let order = WorkOrder {
            wo: "WO-1".into(),
            style: "ST".into(),
            buyer: "B".into(),
            item: "I".into(),
            color: "C".into(),
            size: "S".into(),
        };
        let selection = WorkOrderSelection::from(&order);
        assert_eq!(ready_to_scan("", &selection), Err(ValidationError::Required("Line")));
        let req = register_request("E200", " L01 ", &selection).unwrap();
        assert_eq!(req.line_id, "L01");
        assert_eq!(req.work_order, order);
        assert_eq!(RfidRegistration::full_name(), "u501_rfid_registration");
    }
}
