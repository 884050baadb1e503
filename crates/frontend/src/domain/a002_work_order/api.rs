use crate::shared::api_utils::segment;
use crate::shared::http::{get_json, get_optional_json, post_json, ApiError};
use contracts::domain::a002_work_order::WorkOrder;
use contracts::domain::a003_rfid_garment::ScanResponse;

/// Every known work order; the dropdown catalog is built from this list
pub async fn fetch_work_orders() -> Result<Vec<WorkOrder>, ApiError> {
    get_json("/api/work-orders").await
}

/// Work order running on a line, `None` when nothing is assigned
pub async fn fetch_line_work_order(line_id: &str) -> Result<Option<WorkOrder>, ApiError> {
    get_optional_json(&format!("/api/lines/{}/work-order", segment(line_id))).await
}

pub async fn assign_work_order(
    line_id: &str,
    work_order: &WorkOrder,
) -> Result<ScanResponse, ApiError> {
    post_json(
        &format!("/api/lines/{}/work-order", segment(line_id)),
        work_order,
    )
    .await
}
