use crate::shared::api_utils::segment;
use crate::shared::http::{get_json, post_json, ApiError};
use contracts::domain::a001_production_line::{
    LineSettings, ProductionLine, UpdateLineSettingsRequest,
};
use contracts::domain::a003_rfid_garment::ScanResponse;

/// All production lines
pub async fn fetch_lines() -> Result<Vec<ProductionLine>, ApiError> {
    get_json("/api/lines").await
}

pub async fn fetch_settings(line_id: &str) -> Result<LineSettings, ApiError> {
    get_json(&format!("/api/lines/{}/settings", segment(line_id))).await
}

pub async fn save_settings(
    line_id: &str,
    request: &UpdateLineSettingsRequest,
) -> Result<ScanResponse, ApiError> {
    post_json(&format!("/api/lines/{}/settings", segment(line_id)), request).await
}
