//! Tolerant deserializers for counters coming from the tracking backend.
//!
//! The tracking endpoint is not strict about types: counters arrive as numbers,
//! numeric strings or `null`. Anything that is not a usable non-negative number
//! is read as 0 so a single bad field never blanks the whole dashboard.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Convert an arbitrary JSON value into a non-negative counter.
pub fn count_from_value(value: &Value) -> u64 {
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                v
            } else if let Some(v) = n.as_f64() {
                if v.is_finite() && v > 0.0 {
                    v.trunc() as u64
                } else {
                    0
                }
            } else {
                0
            }
        }
        Value::String(s) => {
            let s = s.trim();
            if let Ok(v) = s.parse::<u64>() {
                v
            } else {
                s.parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite() && *v > 0.0)
                    .map(|v| v.trunc() as u64)
                    .unwrap_or(0)
            }
        }
        _ => 0,
    }
}

/// `deserialize_with` adapter for counter fields.
pub fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(count_from_value(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numbers() {
        assert_eq!(count_from_value(&json!(42)), 42);
        assert_eq!(count_from_value(&json!(0)), 0);
        assert_eq!(count_from_value(&json!(12.9)), 12);
    }

    #[test]
    fn test_negative_is_zero() {
        assert_eq!(count_from_value(&json!(-3)), 0);
        assert_eq!(count_from_value(&json!(-0.5)), 0);
        assert_eq!(count_from_value(&json!("-7")), 0);
    }

    #[test]
    fn test_strings() {
        assert_eq!(count_from_value(&json!("17")), 17);
        assert_eq!(count_from_value(&json!(" 8 ")), 8);
        assert_eq!(count_from_value(&json!("3.0")), 3);
        assert_eq!(count_from_value(&json!("n/a")), 0);
        assert_eq!(count_from_value(&json!("")), 0);
    }

    #[test]
    fn test_other_types() {
        assert_eq!(count_from_value(&Value::Null), 0);
        assert_eq!(count_from_value(&json!(true)), 0);
        assert_eq!(count_from_value(&json!([1, 2])), 0);
        assert_eq!(count_from_value(&json!({"v": 1})), 0);
    }
}
