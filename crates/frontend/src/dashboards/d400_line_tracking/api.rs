use crate::shared::api_utils::segment;
use crate::shared::http::{get_raw, ApiError};
use contracts::dashboards::d400_line_tracking::TrackingCounters;

/// Current counters of a line.
///
/// Unknown lines and unreadable payloads come back as zeros. Error statuses
/// are errors so the dashboard keeps its last values.
pub async fn fetch_tracking(line_id: &str) -> Result<TrackingCounters, ApiError> {
    let response = get_raw(&format!("/api/tracking/{}", segment(line_id))).await?;
    if response.status == 404 {
        log::debug!("tracking for {} not found, showing zeros", line_id);
    }
    TrackingCounters::from_response(response.status, &response.body).map_err(ApiError::Status)
}
