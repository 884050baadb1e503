//! Validation errors raised by form models before anything is sent to the backend

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: u64,
        max: u64,
    },

    #[error("{0} must be a time in HH:MM format")]
    InvalidTime(&'static str),

    #[error("RFID code '{0}' contains invalid characters")]
    InvalidRfid(String),
}

/// Trimmed, non-empty check shared by all forms.
pub fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

/// Accepts `H:MM` or `HH:MM` on a 24h clock.
pub fn validate_time(value: &str, field: &'static str) -> Result<(), ValidationError> {
    let err = || ValidationError::InvalidTime(field);
    let (hours, minutes) = value.trim().split_once(':').ok_or_else(err)?;
    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return Err(err());
    }
    let hours: u8 = hours.parse().map_err(|_| err())?;
    let minutes: u8 = minutes.parse().map_err(|_| err())?;
    if hours > 23 || minutes > 59 {
        return Err(err());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        assert!(require("Line 1", "Title").is_ok());
        assert_eq!(require("   ", "Title"), Err(ValidationError::Required("Title")));
    }

    #[test]
    fn test_validate_time() {
        assert!(validate_time("07:30", "Start time").is_ok());
        assert!(validate_time("7:30", "Start time").is_ok());
        assert!(validate_time("23:59", "Start time").is_ok());
        assert!(validate_time("24:00", "Start time").is_err());
        assert!(validate_time("07:60", "Start time").is_err());
        assert!(validate_time("0730", "Start time").is_err());
        assert!(validate_time("07:3", "Start time").is_err());
        assert!(validate_time("", "Start time").is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = ValidationError::OutOfRange {
            field: "Target",
            min: 0,
            max: 100_000,
        };
        assert_eq!(err.to_string(), "Target must be between 0 and 100000");
        assert_eq!(
            ValidationError::Required("Buyer").to_string(),
            "Buyer is required"
        );
    }
}
