use crate::domain::a003_rfid_garment::ScrapGarmentRequest;
use crate::domain::common::validation::require;
use crate::domain::common::ValidationError;
use crate::usecases::common::UseCaseMetadata;

pub struct RfidReject;

impl UseCaseMetadata for RfidReject {
    fn usecase_index() -> &'static str {
        "u503"
    }

    fn usecase_name() -> &'static str {
        "rfid_reject"
    }

    fn display_name() -> &'static str {
        "RFID reject"
    }

    fn description() -> &'static str {
        "Scrap rejected garments and release their tags"
    }
}

/// Scanning is only possible once a line and a reason are chosen.
pub fn ready_to_scan(line_id: &str, reason: &str) -> Result<(), ValidationError> {
    require(line_id, "Line")?;
    require(reason, "Reject reason")
}

/// Build a scrap request; both the line and a reason are mandatory.
pub fn scrap_request(
    rfid: &str,
    line_id: &str,
    reason: &str,
) -> Result<ScrapGarmentRequest, ValidationError> {
    require(line_id, "Line")?;
    require(reason, "Reject reason")?;
    Ok(ScrapGarmentRequest {
        rfid: rfid.to_string(),
        line_id: line_id.trim().to_string(),
        reason: reason.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrap_request_requires_reason() {
        assert_eq!(
            scrap_request("E200", "L01", " "),
            Err(ValidationError::Required("Reject reason"))
        );
        assert_eq!(
            scrap_request("E200", "", "Stain"),
            Err(ValidationError::Required("Line"))
        );
        let req = scrap_request("E200", "L01", " Stain ").unwrap();
        assert_eq!(req.reason, "Stain");
    }

    #[test]
    fn test_ready_to_scan() {
        assert_eq!(
            ready_to_scan("", "Stain"),
            Err(ValidationError::Required("Line"))
        );
        assert_eq!(
            ready_to_scan("L01", ""),
            Err(ValidationError::Required("Reject reason"))
        );
        assert_eq!(ready_to_scan("L01", "Stain"), Ok(()));
    }

    #[test]
    fn test_full_name() {
        assert_eq!(RfidReject::full_name(), "u503_rfid_reject");
    }
}
