use crate::domain::common::validation::{require, validate_time};
use crate::domain::common::ValidationError;
use serde::{Deserialize, Serialize};

/// Upper bound accepted for a daily line target
pub const MAX_LINE_TARGET: u64 = 100_000;

/// Production line as returned by `GET /api/lines`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductionLine {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub supervisor: Option<String>,
    /// Shift start, "HH:MM"
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub target: u64,
}

impl ProductionLine {
    /// Label for selectors: title, falling back to the id
    pub fn display_name(&self) -> String {
        if self.title.trim().is_empty() {
            self.id.clone()
        } else {
            self.title.clone()
        }
    }

    pub fn supervisor_or_dash(&self) -> String {
        self.supervisor
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("—")
            .to_string()
    }
}

/// Editable part of a line (`GET /api/lines/{id}/settings`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSettings {
    pub line_id: String,
    #[serde(default)]
    pub supervisor: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub target: u64,
}

/// Body of `POST /api/lines/{id}/settings`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateLineSettingsRequest {
    pub supervisor: String,
    pub start_time: String,
    pub target: u64,
}

impl UpdateLineSettingsRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.supervisor, "Supervisor")?;
        require(&self.start_time, "Start time")?;
        validate_time(&self.start_time, "Start time")?;
        if self.target > MAX_LINE_TARGET {
            return Err(ValidationError::OutOfRange {
                field: "Target",
                min: 0,
                max: MAX_LINE_TARGET,
            });
        }
        Ok(())
    }

    /// Build a request from raw form inputs; the target arrives as text.
    pub fn from_form(
        supervisor: &str,
        start_time: &str,
        target: &str,
    ) -> Result<Self, ValidationError> {
        require(target, "Target")?;
        let target = target
            .trim()
            .parse::<u64>()
            .map_err(|_| ValidationError::OutOfRange {
                field: "Target",
                min: 0,
                max: MAX_LINE_TARGET,
            })?;

        let request = Self {
            supervisor: supervisor.trim().to_string(),
            start_time: start_time.trim().to_string(),
            target,
        };
        request.validate()?;
        Ok(request)
    }
}

impl From<&LineSettings> for UpdateLineSettingsRequest {
    fn from(settings: &LineSettings) -> Self {
        Self {
            supervisor: settings.supervisor.clone(),
            start_time: settings.start_time.clone(),
            target: settings.target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_deserialize_with_missing_fields() {
        let line: ProductionLine =
            serde_json::from_str(r#"{"id":"L01","title":"Line 1"}"#).unwrap();
        assert_eq!(line.target, 0);
        assert_eq!(line.supervisor, None);
        assert_eq!(line.supervisor_or_dash(), "—");
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let line = ProductionLine {
            id: "L07".into(),
            title: " ".into(),
            supervisor: Some("Rina".into()),
            start_time: None,
            target: 800,
        };
        assert_eq!(line.display_name(), "L07");
        assert_eq!(line.supervisor_or_dash(), "Rina");
    }

    #[test]
    fn test_from_form_ok() {
        let req = UpdateLineSettingsRequest::from_form(" Rina ", "07:30", " 1200 ").unwrap();
        assert_eq!(req.supervisor, "Rina");
        assert_eq!(req.start_time, "07:30");
        assert_eq!(req.target, 1200);
    }

    #[test]
    fn test_from_form_errors() {
        assert_eq!(
            UpdateLineSettingsRequest::from_form("", "07:30", "10"),
            Err(ValidationError::Required("Supervisor"))
        );
        assert_eq!(
            UpdateLineSettingsRequest::from_form("Rina", "7h", "10"),
            Err(ValidationError::InvalidTime("Start time"))
        );
        assert_eq!(
            UpdateLineSettingsRequest::from_form("Rina", "07:30", ""),
            Err(ValidationError::Required("Target"))
        );
        assert!(UpdateLineSettingsRequest::from_form("Rina", "07:30", "-5").is_err());
        assert!(UpdateLineSettingsRequest::from_form("Rina", "07:30", "100001").is_err());
    }
}
