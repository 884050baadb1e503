//! Environment configuration served by `GET /api/env`

use serde::{Deserialize, Serialize};

pub const DEFAULT_TRACKING_POLL_MS: u32 = 1_000;
pub const DEFAULT_WORK_ORDER_POLL_MS: u32 = 30_000;
/// Lower bound for any polling interval, keeps a bad config from hammering the API
pub const MIN_POLL_MS: u32 = 250;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    pub factory_name: String,
    /// Overrides the API base derived from the page location
    pub api_base: Option<String>,
    pub tracking_poll_ms: u32,
    pub work_order_poll_ms: u32,
    /// Line preselected when nothing is stored locally
    pub default_line: Option<String>,
    pub reject_reasons: Vec<String>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            factory_name: "RFID Line Monitor".to_string(),
            api_base: None,
            tracking_poll_ms: DEFAULT_TRACKING_POLL_MS,
            work_order_poll_ms: DEFAULT_WORK_ORDER_POLL_MS,
            default_line: None,
            reject_reasons: vec![
                "Fabric defect".to_string(),
                "Stain".to_string(),
                "Broken stitch".to_string(),
                "Measurement out of tolerance".to_string(),
                "Other".to_string(),
            ],
        }
    }
}

impl EnvConfig {
    pub fn tracking_interval_ms(&self) -> u32 {
        self.tracking_poll_ms.max(MIN_POLL_MS)
    }

    pub fn work_order_interval_ms(&self) -> u32 {
        self.work_order_poll_ms.max(MIN_POLL_MS)
    }

    /// `api_base` without a trailing slash, ignoring blank values
    pub fn api_base_override(&self) -> Option<String> {
        self.api_base
            .as_deref()
            .map(|s| s.trim().trim_end_matches('/'))
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_missing_fields() {
        let cfg: EnvConfig = serde_json::from_str(r#"{"factory_name":"Plant A"}"#).unwrap();
        assert_eq!(cfg.factory_name, "Plant A");
        assert_eq!(cfg.tracking_interval_ms(), 1_000);
        assert_eq!(cfg.work_order_interval_ms(), 30_000);
        assert!(!cfg.reject_reasons.is_empty());
    }

    #[test]
    fn test_interval_floor() {
        let cfg: EnvConfig = serde_json::from_str(r#"{"tracking_poll_ms":10}"#).unwrap();
        assert_eq!(cfg.tracking_interval_ms(), MIN_POLL_MS);
    }

    #[test]
    fn test_api_base_override() {
        let mut cfg = EnvConfig::default();
        assert_eq!(cfg.api_base_override(), None);
        cfg.api_base = Some("  ".into());
        assert_eq!(cfg.api_base_override(), None);
        cfg.api_base = Some("http://10.0.0.5:8080/".into());
        assert_eq!(cfg.api_base_override().as_deref(), Some("http://10.0.0.5:8080"));
    }
}
