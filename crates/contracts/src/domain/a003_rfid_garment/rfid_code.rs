use crate::domain::common::ValidationError;

/// Longest tag payload accepted from a reader
pub const MAX_RFID_LEN: usize = 64;

/// Canonical form of a scanned code: trimmed and uppercased.
///
/// Readers in keyboard-wedge mode sometimes emit lowercase hex or trailing
/// CR/LF; both collapse to the same code here so duplicate detection works.
pub fn normalize_rfid(raw: &str) -> Result<String, ValidationError> {
    let code = raw.trim().to_ascii_uppercase();
    if code.is_empty() {
        return Err(ValidationError::Required("RFID code"));
    }
    let valid = code.len() <= MAX_RFID_LEN
        && code.chars().all(|c| c.is_ascii_alphanumeric());
    if !valid {
        return Err(ValidationError::InvalidRfid(code));
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize_rfid(" e28011700000020f6a1b2c3d\r\n").unwrap(),
            "E28011700000020F6A1B2C3D"
        );
        assert_eq!(normalize_rfid("tag0001").unwrap(), "TAG0001");
    }

    #[test]
    fn test_rejects_empty_and_garbage() {
        assert_eq!(
            normalize_rfid("   "),
            Err(ValidationError::Required("RFID code"))
        );
        assert!(matches!(
            normalize_rfid("AB CD"),
            Err(ValidationError::InvalidRfid(_))
        ));
        assert!(normalize_rfid("E2;01").is_err());
        assert!(matches!(
            normalize_rfid("TAG-0001"),
            Err(ValidationError::InvalidRfid(_))
        ));
        assert!(normalize_rfid(&"A".repeat(MAX_RFID_LEN + 1)).is_err());
    }
}
