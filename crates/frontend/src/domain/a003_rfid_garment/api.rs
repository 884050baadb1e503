use crate::shared::api_utils::segment;
use crate::shared::http::{get_optional_json, post_json, ApiError};
use contracts::domain::a003_rfid_garment::{
    RegisterGarmentRequest, RfidLookup, ScanResponse, ScrapGarmentRequest,
};

pub async fn register_garment(request: &RegisterGarmentRequest) -> Result<ScanResponse, ApiError> {
    post_json("/api/garments/register", request).await
}

pub async fn scrap_garment(request: &ScrapGarmentRequest) -> Result<ScanResponse, ApiError> {
    post_json("/api/garments/scrap", request).await
}

/// Look a tag up; `None` when the backend does not know it
pub async fn lookup_rfid(code: &str) -> Result<Option<RfidLookup>, ApiError> {
    get_optional_json(&format!("/api/rfid/{}", segment(code))).await
}
