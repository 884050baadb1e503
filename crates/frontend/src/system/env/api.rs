use crate::shared::http::{get_json, ApiError};
use contracts::system::env::EnvConfig;

/// Fetch environment config
pub async fn fetch_env() -> Result<EnvConfig, ApiError> {
    get_json::<EnvConfig>("/api/env").await
}
